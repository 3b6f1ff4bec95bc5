//! Object detector session
//!
//! Explicit handle for the detector model: JS reports when loading starts
//! and finishes, then pushes each frame's predictions. Nothing is global.

use log::{info, warn};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct DetectedObject {
    pub label: String,
    pub score: f32,
}

impl DetectedObject {
    pub fn new(label: impl Into<String>, score: f32) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelState {
    Unloaded,
    Loading,
    Ready,
    Closed,
}

#[derive(Debug, Error, PartialEq)]
pub enum DetectionError {
    #[error("object detector is not ready (state: {0:?})")]
    NotReady(ModelState),
    #[error("object detector session was closed")]
    Closed,
    #[error("got {labels} labels but {scores} scores")]
    LengthMismatch { labels: usize, scores: usize },
}

pub struct DetectionSession {
    state: ModelState,
    latest: Vec<DetectedObject>,
    frames: u64,
}

impl DetectionSession {
    pub fn new() -> Self {
        Self {
            state: ModelState::Unloaded,
            latest: Vec::new(),
            frames: 0,
        }
    }

    pub fn state(&self) -> ModelState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == ModelState::Ready
    }

    /// Model download started. Idempotent while loading or ready.
    pub fn begin_loading(&mut self) -> Result<(), DetectionError> {
        match self.state {
            ModelState::Closed => Err(DetectionError::Closed),
            ModelState::Unloaded => {
                self.state = ModelState::Loading;
                info!("object detector loading");
                Ok(())
            }
            ModelState::Loading | ModelState::Ready => Ok(()),
        }
    }

    pub fn mark_ready(&mut self) -> Result<(), DetectionError> {
        if self.state == ModelState::Closed {
            return Err(DetectionError::Closed);
        }
        if self.state != ModelState::Ready {
            info!("object detector ready");
        }
        self.state = ModelState::Ready;
        Ok(())
    }

    /// Replace the stored detections with this frame's predictions
    pub fn ingest(&mut self, objects: Vec<DetectedObject>) -> Result<&[DetectedObject], DetectionError> {
        match self.state {
            ModelState::Ready => {}
            ModelState::Closed => return Err(DetectionError::Closed),
            other => {
                warn!("dropping {} detections, model {:?}", objects.len(), other);
                return Err(DetectionError::NotReady(other));
            }
        }

        self.latest = objects;
        self.frames += 1;
        Ok(&self.latest)
    }

    /// Zip parallel label/score arrays as they come from JS
    pub fn ingest_parallel(&mut self, labels: &[String], scores: &[f32]) -> Result<&[DetectedObject], DetectionError> {
        if labels.len() != scores.len() {
            return Err(DetectionError::LengthMismatch {
                labels: labels.len(),
                scores: scores.len(),
            });
        }
        let objects = labels
            .iter()
            .zip(scores)
            .map(|(label, &score)| DetectedObject::new(label.as_str(), score))
            .collect();
        self.ingest(objects)
    }

    pub fn latest(&self) -> &[DetectedObject] {
        &self.latest
    }

    /// Number of frames ingested since the model became ready
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Release the session. Further calls fail with `Closed`.
    pub fn teardown(&mut self) {
        if self.state != ModelState::Closed {
            info!("object detector session closed after {} frames", self.frames);
        }
        self.state = ModelState::Closed;
        self.latest.clear();
    }
}

impl Default for DetectionSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let mut session = DetectionSession::new();
        assert_eq!(session.state(), ModelState::Unloaded);
        session.begin_loading().unwrap();
        assert_eq!(session.state(), ModelState::Loading);
        session.begin_loading().unwrap();
        session.mark_ready().unwrap();
        assert!(session.is_ready());

        session.teardown();
        assert_eq!(session.state(), ModelState::Closed);
        assert_eq!(session.begin_loading(), Err(DetectionError::Closed));
        assert_eq!(session.mark_ready(), Err(DetectionError::Closed));
    }

    #[test]
    fn test_ingest_requires_ready() {
        let mut session = DetectionSession::new();
        assert_eq!(
            session.ingest(vec![DetectedObject::new("apple", 0.9)]).unwrap_err(),
            DetectionError::NotReady(ModelState::Unloaded)
        );
        session.begin_loading().unwrap();
        assert_eq!(
            session.ingest(Vec::new()).unwrap_err(),
            DetectionError::NotReady(ModelState::Loading)
        );
    }

    #[test]
    fn test_ingest_replaces_latest() {
        let mut session = DetectionSession::new();
        session.mark_ready().unwrap();
        session
            .ingest(vec![DetectedObject::new("apple", 0.9), DetectedObject::new("cup", 0.4)])
            .unwrap();
        assert_eq!(session.latest().len(), 2);

        let latest = session.ingest(vec![DetectedObject::new("bottle", 0.7)]).unwrap();
        assert_eq!(latest, &[DetectedObject::new("bottle", 0.7)][..]);
        assert_eq!(session.frame_count(), 2);

        session.teardown();
        assert!(session.latest().is_empty());
        assert_eq!(session.ingest(Vec::new()).unwrap_err(), DetectionError::Closed);
    }

    #[test]
    fn test_ingest_parallel() {
        let mut session = DetectionSession::new();
        session.mark_ready().unwrap();
        let labels = vec!["banana".to_string(), "knife".to_string()];
        let latest = session.ingest_parallel(&labels, &[0.8, 0.6]).unwrap();
        assert_eq!(latest[1], DetectedObject::new("knife", 0.6));

        assert_eq!(
            session.ingest_parallel(&labels, &[0.8]).unwrap_err(),
            DetectionError::LengthMismatch { labels: 2, scores: 1 }
        );
    }
}
