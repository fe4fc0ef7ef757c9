use crate::env::Action;
use rand::Rng;

#[derive(Debug, Clone, Copy)]
pub struct Choice {
    pub action: Action,
    pub weight: u32,
}

/// A discrete distribution over actions, sampled by cumulative weight.
#[derive(Debug, Clone)]
pub struct Policy {
    pub choices: Vec<Choice>,
}

impl Policy {
    pub fn choose(&self, rng: &mut impl Rng) -> Action {
        let total = self.choices.iter().map(|c| c.weight).sum::<u32>();
        assert!(total > 0, "policy with no weight");
        let roll = rng.random_range(0..total);
        let mut sum = 0;
        for choice in self.choices.iter() {
            sum += choice.weight;
            if roll < sum {
                return choice.action;
            }
        }
        unreachable!("roll below total weight")
    }
}
