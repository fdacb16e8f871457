use derivative::Derivative;
use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};

#[derive(Derivative, Serialize, Deserialize, Sequence)]
#[derivative(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Side {
    #[derivative(Default)]
    Home,
    Away,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Self::Home => Self::Away,
            Self::Away => Self::Home,
        }
    }
}

impl core::fmt::Display for Side {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self {
            Self::Home => write!(f, "Home"),
            Self::Away => write!(f, "Away"),
        }
    }
}
