use crate::view::ViewId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("Unknown view: {0:?}")]
    UnknownView(ViewId),

    #[error("View {child:?} is already attached to a parent")]
    AlreadyAttached { child: ViewId },

    #[error("Attaching {child:?} under {parent:?} would create a cycle")]
    CycleDetected { parent: ViewId, child: ViewId },
}

pub type Result<T> = std::result::Result<T, TreeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_view_display() {
        let error = TreeError::UnknownView(ViewId(7));
        let msg = format!("{}", error);
        assert!(msg.contains("Unknown view"));
        assert!(msg.contains('7'));
    }

    #[test]
    fn test_already_attached_display() {
        let error = TreeError::AlreadyAttached { child: ViewId(2) };
        let msg = format!("{}", error);
        assert!(msg.contains("already attached"));
    }

    #[test]
    fn test_cycle_detected_display() {
        let error = TreeError::CycleDetected {
            parent: ViewId(1),
            child: ViewId(0),
        };
        let msg = format!("{}", error);
        assert!(msg.contains("cycle"));
    }
}
