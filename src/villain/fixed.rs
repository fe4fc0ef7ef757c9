use super::Response;
use super::Villain;
use crate::cards::Holding;
use rand::rngs::SmallRng;

/// Calls every all-in. Every raise goes to showdown.
#[derive(Debug, Default, Clone, Copy)]
pub struct Station;

impl Villain for Station {
    fn respond(&self, _: &Holding, _: &mut SmallRng) -> Response {
        Response::Call
    }
}

/// Folds to every all-in.
#[derive(Debug, Default, Clone, Copy)]
pub struct Nit;

impl Villain for Nit {
    fn respond(&self, _: &Holding, _: &mut SmallRng) -> Response {
        Response::Fold
    }
}
