//! Ordering commands: `>`, `>=`, `<`, `<=`.

use std::cmp::Ordering;

use super::Command;
use crate::domain::{FilterError, Value};

/// Relation checked by an [`OrderingCommand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
}

impl Comparison {
    pub const ALL: [Comparison; 4] = [
        Comparison::Greater,
        Comparison::GreaterOrEqual,
        Comparison::Less,
        Comparison::LessOrEqual,
    ];

    /// Command name of the relation.
    pub fn symbol(self) -> &'static str {
        match self {
            Comparison::Greater => ">",
            Comparison::GreaterOrEqual => ">=",
            Comparison::Less => "<",
            Comparison::LessOrEqual => "<=",
        }
    }

    fn holds(self, ordering: Ordering) -> bool {
        match self {
            Comparison::Greater => ordering == Ordering::Greater,
            Comparison::GreaterOrEqual => ordering != Ordering::Less,
            Comparison::Less => ordering == Ordering::Less,
            Comparison::LessOrEqual => ordering != Ordering::Greater,
        }
    }
}

/// Natural ordering of two numbers or two strings.
///
/// Numbers compare exactly, including integers against floats beyond 2^53.
/// Returns `None` for other pairings and for NaN.
pub fn natural_order(target: &Value, operand: &Value) -> Option<Ordering> {
    match (target, operand) {
        (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
        (Value::Float(a), _) => integer(operand)
            .and_then(|b| cmp_int_float(b, *a))
            .map(Ordering::reverse),
        (_, Value::Float(b)) => integer(target).and_then(|a| cmp_int_float(a, *b)),
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        _ => Some(integer(target)?.cmp(&integer(operand)?)),
    }
}

/// Both integer variants widened to one type.
fn integer(value: &Value) -> Option<i128> {
    match value {
        Value::Integer(i) => Some(i128::from(*i)),
        Value::UInteger(u) => Some(i128::from(*u)),
        _ => None,
    }
}

/// Compare an integer against a float without rounding the integer.
fn cmp_int_float(a: i128, b: f64) -> Option<Ordering> {
    // Integers lie in [-2^63, 2^64)
    const LOWER: f64 = -9_223_372_036_854_775_808.0;
    const UPPER: f64 = 18_446_744_073_709_551_616.0;

    if b.is_nan() {
        return None;
    }
    if b < LOWER {
        return Some(Ordering::Greater);
    }
    if b >= UPPER {
        return Some(Ordering::Less);
    }

    let whole = b.trunc() as i128;
    Some(a.cmp(&whole).then_with(|| {
        let fract = b.fract();
        if fract > 0.0 {
            Ordering::Less
        } else if fract < 0.0 {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }))
}

/// Comparison of the target against the operand by natural ordering.
pub struct OrderingCommand {
    comparison: Comparison,
}

impl OrderingCommand {
    pub fn new(comparison: Comparison) -> Self {
        Self { comparison }
    }
}

impl Command for OrderingCommand {
    fn name(&self) -> &str {
        self.comparison.symbol()
    }

    fn evaluate(&self, target: &Value, operand: &Value) -> Result<bool, FilterError> {
        natural_order(target, operand)
            .map(|ordering| self.comparison.holds(ordering))
            .ok_or_else(|| FilterError::UnorderableOperands {
                command: self.name().to_string(),
                target: target.type_name(),
                operand: operand.type_name(),
            })
    }
}
