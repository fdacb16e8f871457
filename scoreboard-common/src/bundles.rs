use crate::side::Side;
use core::{
    fmt::{Display, Formatter},
    ops::{Index, IndexMut},
};
use derivative::Derivative;
use serde::{Deserialize, Serialize};

/// One value per team
#[derive(Derivative, Serialize, Deserialize)]
#[derivative(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeAwayBundle<T> {
    pub home: T,
    pub away: T,
}

impl<T> HomeAwayBundle<T> {
    pub const fn new(home: T, away: T) -> Self {
        Self { home, away }
    }
}

impl<T: Clone> HomeAwayBundle<T> {
    pub fn splat(value: T) -> Self {
        Self {
            home: value.clone(),
            away: value,
        }
    }
}

impl<T> Index<Side> for HomeAwayBundle<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }
}

impl<T> IndexMut<Side> for HomeAwayBundle<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        match side {
            Side::Home => &mut self.home,
            Side::Away => &mut self.away,
        }
    }
}

impl<T: Display> Display for HomeAwayBundle<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Home: {}, Away: {}", self.home, self.away)
    }
}
