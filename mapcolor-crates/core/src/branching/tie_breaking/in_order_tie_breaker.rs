use super::Direction;
use super::TieBreaker;

/// A tie-breaker which selects the first variable that it receives with the "best" value
/// according to the provided [`Direction`].
///
/// For example, if the direction is [`Direction::Minimum`] and both `x1` and `x2` have value 2,
/// then receiving `x2` before `x1` results in `x2` being selected. Since the selectors consider
/// the variables in index order, ties are broken in favour of the lowest index.
#[derive(Debug)]
pub struct InOrderTieBreaker<Var, Value> {
    /// The selected variable, [`None`] if no variable has been considered yet
    selected_variable: Option<Var>,
    /// The value of the selected variable
    selected_value: Option<Value>,
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

    fn improves_on(&self, value: &Value, selected_value: &Value) -> bool
    where
        Value: PartialOrd,
    {
        match self.direction {
            Direction::Maximum => value > selected_value,
            Direction::Minimum => value < selected_value,
        }
    }
}

impl<Var: Copy, Value: PartialOrd> TieBreaker<Var, Value> for InOrderTieBreaker<Var, Value> {
    fn consider(&mut self, variable: Var, value: Value) {
        let replace = match self.selected_value.as_ref() {
            Some(selected_value) => self.improves_on(&value, selected_value),
            None => true,
        };

        if replace {
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
