use std::collections::VecDeque;

use crate::controllers::engine::commands::EngineCommand;

/// Commands collected between two frame boundaries, applied in arrival order.
#[derive(Debug, Default)]
pub struct CommandQueue {
    pending: VecDeque<EngineCommand>,
}

impl CommandQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: EngineCommand) {
        self.pending.push_back(command);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = EngineCommand> + '_ {
        self.pending.drain(..)
    }
}

impl Extend<EngineCommand> for CommandQueue {
    fn extend<I: IntoIterator<Item = EngineCommand>>(&mut self, commands: I) {
        self.pending.extend(commands);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_preserves_order_and_empties() {
        let mut queue = CommandQueue::new();
        queue.push(EngineCommand::Zoom { scroll_delta: 1.0 });
        queue.push(EngineCommand::Pan { dx: 1.0, dy: 2.0 });
        queue.push(EngineCommand::ResetView);

        let drained: Vec<EngineCommand> = queue.drain().collect();

        assert_eq!(
            drained,
            vec![
                EngineCommand::Zoom { scroll_delta: 1.0 },
                EngineCommand::Pan { dx: 1.0, dy: 2.0 },
                EngineCommand::ResetView,
            ]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_extend_appends() {
        let mut queue = CommandQueue::new();
        queue.push(EngineCommand::ResetView);

        queue.extend([
            EngineCommand::Zoom { scroll_delta: -1.0 },
            EngineCommand::Zoom { scroll_delta: 2.0 },
        ]);

        assert_eq!(queue.len(), 3);
    }
}
