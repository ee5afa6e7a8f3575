use super::Direction;
use super::TieBreaker;

/// A tie-breaker which simply selects the first candidate that it receives
/// with the "best" value according to the provided [`Direction`].
///
/// For example, if the provided direction is [`Direction::Minimum`] and there
/// are two subjects `x1` and `x2` both with value 5, then if the tie-breaker
/// first receives `x2` and then `x1` it will return `x2` because it was the
/// first candidate with the minimum value which was provided. Feeding the
/// candidates in input order therefore realises the stable input-order
/// fallback.
#[derive(Debug)]
pub struct InOrderTieBreaker<Var, Value> {
    /// The selected candidate, [`None`] if no candidate has been considered yet
    selected_variable: Option<Var>,
    /// The value of the selected candidate
    selected_value: Option<Value>,
    /// Whether to keep the candidate with the maximum or the minimum value
    direction: Direction,
}

impl<Var, Value> InOrderTieBreaker<Var, Value> {
    pub fn new(direction: Direction) -> Self {
        Self {
            selected_variable: None,
            selected_value: None,
            direction,
        }
    }

    fn reset(&mut self) {
        self.selected_variable = None;
        self.selected_value = None;
    }
}

impl<Var: Copy, Value: PartialOrd> TieBreaker<Var, Value> for InOrderTieBreaker<Var, Value> {
    fn consider(&mut self, variable: Var, value: Value) {
        if let Some(selected_value) = self.selected_value.as_mut() {
            // Only a strictly better value replaces the stored candidate; an
            // equal value keeps the first candidate which was considered.
            let better = match self.direction {
                Direction::Maximum => value > *selected_value,
                Direction::Minimum => value < *selected_value,
            };
            if better {
                self.selected_variable = Some(variable);
                self.selected_value = Some(value);
            }
        } else {
            self.selected_variable = Some(variable);
            self.selected_value = Some(value);
        }
    }

    fn select(&mut self) -> Option<Var> {
        let selected = self.selected_variable;
        self.reset();
        selected
    }

    fn get_direction(&self) -> Direction {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::Subject;

    #[test]
    fn selection_keeps_the_first_of_equal_values() {
        let mut breaker = InOrderTieBreaker::new(Direction::Minimum);

        breaker.consider(Subject::new(0), 10);
        breaker.consider(Subject::new(1), 10);
        breaker.consider(Subject::new(2), 10);

        assert_eq!(breaker.select(), Some(Subject::new(0)));
    }

    #[test]
    fn selection_picks_the_lowest_value() {
        let mut breaker = InOrderTieBreaker::new(Direction::Minimum);

        breaker.consider(Subject::new(0), 10);
        breaker.consider(Subject::new(1), 5);
        breaker.consider(Subject::new(2), 10);

        assert_eq!(breaker.select(), Some(Subject::new(1)));
    }

    #[test]
    fn selecting_resets_the_stored_state() {
        let mut breaker = InOrderTieBreaker::new(Direction::Maximum);

        breaker.consider(Subject::new(0), 1);
        assert_eq!(breaker.select(), Some(Subject::new(0)));
        assert_eq!(breaker.select(), None);
    }
}
