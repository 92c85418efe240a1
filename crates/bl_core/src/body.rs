use serde::{Deserialize, Serialize};

use crate::urn::base_avatars_urn;

/// Base avatar skeleton/shape selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyType {
    Male,
    Female,
}

impl BodyType {
    /// Shape name as the avatar pipeline knows it.
    pub fn shape_name(&self) -> &'static str {
        match self {
            Self::Male => "BaseMale",
            Self::Female => "BaseFemale",
        }
    }

    /// Fully qualified body shape urn.
    pub fn shape_urn(&self) -> String {
        base_avatars_urn(self.shape_name())
    }

    /// Get all body types.
    pub fn all() -> &'static [BodyType] {
        &[Self::Male, Self::Female]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_names() {
        assert_eq!(BodyType::Male.shape_name(), "BaseMale");
        assert_eq!(BodyType::Female.shape_name(), "BaseFemale");
    }

    #[test]
    fn shape_urn_uses_base_namespace() {
        assert_eq!(
            BodyType::Female.shape_urn(),
            "urn:decentraland:off-chain:base-avatars:BaseFemale"
        );
    }
}
