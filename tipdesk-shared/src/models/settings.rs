use serde::{Deserialize, Serialize};

/// Auto-assign-delivery setting as stored by the platform.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct AutoAssignSetting {
    pub enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let setting = AutoAssignSetting { enabled: true };
        let json = serde_json::to_string(&setting).unwrap();
        let back: AutoAssignSetting = serde_json::from_str(&json).unwrap();

        assert_eq!(setting, back);
    }
}
