use crate::errors::{AppError, AppResult, Capability};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Unrequested,
    Granted,
    Denied,
}

/// Tracks the permission state of one capability for one screen.
///
/// Once granted the prompt is not shown again; a denial is not sticky and
/// the next attempt asks again.
#[derive(Debug, Clone)]
pub struct PermissionGate {
    capability: Capability,
    state: Permission,
}

impl PermissionGate {
    pub fn new(capability: Capability) -> Self {
        Self {
            capability,
            state: Permission::Unrequested,
        }
    }

    pub fn state(&self) -> Permission {
        self.state
    }

    pub fn capability(&self) -> Capability {
        self.capability
    }

    /// Ask (if needed) and fail with `PermissionDenied` when refused.
    pub fn ensure(&mut self, request: impl FnOnce() -> bool) -> AppResult<()> {
        if self.state != Permission::Granted {
            self.state = if request() {
                Permission::Granted
            } else {
                Permission::Denied
            };
        }

        match self.state {
            Permission::Granted => Ok(()),
            _ => Err(AppError::PermissionDenied(self.capability)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn granted_permission_is_not_requested_twice() {
        let asked = Cell::new(0);
        let mut gate = PermissionGate::new(Capability::Camera);
        assert_eq!(gate.state(), Permission::Unrequested);

        for _ in 0..3 {
            gate.ensure(|| {
                asked.set(asked.get() + 1);
                true
            })
            .unwrap();
        }
        assert_eq!(asked.get(), 1);
        assert_eq!(gate.state(), Permission::Granted);
    }

    #[test]
    fn denial_is_reported_and_asked_again_next_time() {
        let mut gate = PermissionGate::new(Capability::Location);
        let err = gate.ensure(|| false).unwrap_err();
        assert!(matches!(err, AppError::PermissionDenied(Capability::Location)));
        assert_eq!(gate.state(), Permission::Denied);

        gate.ensure(|| true).unwrap();
        assert_eq!(gate.state(), Permission::Granted);
    }
}
