/// Intents the page can send to the splash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashInput {
    /// A planet button was clicked (index into the planet list).
    SelectPlanet(usize),
    /// Show or hide the planet name labels.
    SetLabelsVisible(bool),
    /// Allow the high-detail asteroid tier when zoomed in.
    SetHighDetail(bool),
}

/// A queue of input intents.
/// JS pushes intents through the bridge; the app drains them each frame.
pub struct InputQueue {
    events: Vec<SplashInput>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(8),
        }
    }

    pub fn push(&mut self, event: SplashInput) {
        self.events.push(event);
    }

    /// Drain all pending intents. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<SplashInput> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain_in_order() {
        let mut q = InputQueue::new();
        q.push(SplashInput::SelectPlanet(3));
        q.push(SplashInput::SetLabelsVisible(false));
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(
            events,
            vec![SplashInput::SelectPlanet(3), SplashInput::SetLabelsVisible(false)]
        );
        assert!(q.is_empty());
    }
}
