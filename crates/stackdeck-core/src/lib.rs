/// Requested state transition for a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Start,
    Stop,
}

impl Action {
    /// Run-state code the fleet service reports once this action has taken
    /// effect (stacks API: 1 = active, 2 = inactive).
    pub fn target_status(self) -> i64 {
        match self {
            Action::Start => 1,
            Action::Stop => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Start => "start",
            Action::Stop => "stop",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Action {
    type Err = UnsupportedAction;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "start" => Ok(Action::Start),
            "stop" => Ok(Action::Stop),
            _ => Err(UnsupportedAction(raw.to_string())),
        }
    }
}

/// An action keyword outside the supported set.
///
/// Answered at the request boundary; no remote call is made for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedAction(pub String);

impl std::fmt::Display for UnsupportedAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unsupported action: {}", self.0)
    }
}

impl std::error::Error for UnsupportedAction {}

/// A stack as resolved from the fleet service.
///
/// NOTE: Built fresh on every lookup and discarded with the request; the
/// remote service stays the source of truth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackDescriptor {
    pub name: String,
    pub id: i64,
    pub endpoint_id: i64,
    pub status: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    Warning,
    Error,
}

/// Outcome of a control request plus the exact text returned to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlResult {
    pub outcome: Outcome,
    pub message: String,
}

impl ControlResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Ok,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Error,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_parses_known_keywords() {
        assert_eq!("start".parse::<Action>(), Ok(Action::Start));
        assert_eq!("stop".parse::<Action>(), Ok(Action::Stop));
    }

    #[test]
    fn action_rejects_unknown_keyword() {
        let err = "restart".parse::<Action>().unwrap_err();
        assert_eq!(err.to_string(), "unsupported action: restart");
    }

    #[test]
    fn action_rejects_case_variants() {
        assert!("Start".parse::<Action>().is_err());
        assert!("STOP".parse::<Action>().is_err());
    }

    #[test]
    fn target_status_matches_fleet_codes() {
        assert_eq!(Action::Start.target_status(), 1);
        assert_eq!(Action::Stop.target_status(), 2);
    }

    #[test]
    fn action_displays_as_keyword() {
        assert_eq!(Action::Start.to_string(), "start");
        assert_eq!(Action::Stop.to_string(), "stop");
    }

    #[test]
    fn control_result_constructors_set_outcome() {
        assert_eq!(ControlResult::ok("OK: web start").outcome, Outcome::Ok);
        assert_eq!(ControlResult::warning("w").outcome, Outcome::Warning);
        assert_eq!(ControlResult::error("e").outcome, Outcome::Error);
    }
}
