//! Drag payload abstraction and its in-process implementation.

/// Effects a drag source allows, using the platform vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragEffect {
    #[default]
    None,
    Copy,
    Move,
    Link,
    All,
}

impl DragEffect {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Copy => "copy",
            Self::Move => "move",
            Self::Link => "link",
            Self::All => "all",
        }
    }
}

/// Platform-provided payload attached to one drag gesture.
///
/// Hosts back this with the real platform object; `MemoryDataTransfer` is
/// used when the gesture is simulated in-process.
pub trait DataTransfer {
    /// Stores `data` under `media_type`, replacing any previous value.
    fn set_data(&mut self, media_type: &str, data: &str);
    /// Returns the value for `media_type`, if present.
    fn get_data(&self, media_type: &str) -> Option<String>;
    /// Advertised media types, in the order they were first set.
    fn types(&self) -> Vec<String>;
    fn set_effect_allowed(&mut self, effect: DragEffect);
    fn effect_allowed(&self) -> DragEffect;
}

/// Payload kept in memory for one simulated gesture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryDataTransfer {
    entries: Vec<(String, String)>,
    effect_allowed: DragEffect,
}

impl MemoryDataTransfer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataTransfer for MemoryDataTransfer {
    fn set_data(&mut self, media_type: &str, data: &str) {
        match self.entries.iter_mut().find(|(key, _)| key == media_type) {
            Some((_, value)) => *value = data.to_string(),
            None => self
                .entries
                .push((media_type.to_string(), data.to_string())),
        }
    }

    fn get_data(&self, media_type: &str) -> Option<String> {
        self.entries
            .iter()
            .find(|(key, _)| key == media_type)
            .map(|(_, value)| value.clone())
    }

    fn types(&self) -> Vec<String> {
        self.entries.iter().map(|(key, _)| key.clone()).collect()
    }

    fn set_effect_allowed(&mut self, effect: DragEffect) {
        self.effect_allowed = effect;
    }

    fn effect_allowed(&self) -> DragEffect {
        self.effect_allowed
    }
}
