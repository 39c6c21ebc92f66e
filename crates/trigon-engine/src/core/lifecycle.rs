use thiserror::Error;

/// Where the viewer is in its single run.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Lifecycle {
    #[default]
    Uninitialized,
    /// Window, context, program and mesh exist; no frame drawn yet.
    Initialized,
    Running,
    Closed,
}

#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
#[error("illegal lifecycle transition {from:?} -> {to:?}")]
pub struct LifecycleError {
    pub from: Lifecycle,
    pub to: Lifecycle,
}

impl Lifecycle {
    /// Moves to `next` if the transition is legal.
    ///
    /// Legal: `Uninitialized -> Initialized -> Running -> Closed`, plus
    /// `Initialized -> Closed` for a window closed before its first frame.
    pub fn advance(&mut self, next: Lifecycle) -> Result<(), LifecycleError> {
        use Lifecycle::*;

        let legal = matches!(
            (*self, next),
            (Uninitialized, Initialized)
                | (Initialized, Running)
                | (Running, Closed)
                | (Initialized, Closed)
        );
        if !legal {
            return Err(LifecycleError { from: *self, to: next });
        }

        log::debug!("lifecycle {:?} -> {:?}", *self, next);
        *self = next;
        Ok(())
    }
}
