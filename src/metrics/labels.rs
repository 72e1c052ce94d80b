// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Label types for Prometheus metrics

use prometheus_client::encoding::EncodeLabelSet;

/// How a registration request ended
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum RegistrationStatus {
    Created,
    Invalid,
    Duplicate,
    Rejected,
    Unreachable,
    Error,
}

impl RegistrationStatus {
    pub const ALL: [Self; 6] = [
        Self::Created,
        Self::Invalid,
        Self::Duplicate,
        Self::Rejected,
        Self::Unreachable,
        Self::Error,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Invalid => "invalid",
            Self::Duplicate => "duplicate",
            Self::Rejected => "rejected",
            Self::Unreachable => "unreachable",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct RegistrationLabels {
    pub outcome: String,
}

impl From<RegistrationStatus> for RegistrationLabels {
    fn from(status: RegistrationStatus) -> Self {
        Self {
            outcome: status.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_labels_from_status() {
        let labels = RegistrationLabels::from(RegistrationStatus::Unreachable);
        assert_eq!(labels.outcome, "unreachable");
    }

    #[test]
    fn test_status_names_are_unique() {
        let mut names: Vec<&str> = RegistrationStatus::ALL.iter().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), RegistrationStatus::ALL.len());
    }

    #[test]
    fn test_registration_labels_hash() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(RegistrationLabels::from(RegistrationStatus::Created), 1);

        assert_eq!(
            map.get(&RegistrationLabels {
                outcome: "created".to_string()
            }),
            Some(&1)
        );
    }
}
