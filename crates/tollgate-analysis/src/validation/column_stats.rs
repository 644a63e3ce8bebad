//! Per-column statistics: observed dtype, extrema and uniqueness.

use std::collections::HashSet;

use tollgate_core::types::{Cell, Column, MetricValue};

pub const DTYPE_INT: &str = "int64";
pub const DTYPE_FLOAT: &str = "float64";
pub const DTYPE_BOOL: &str = "bool";
pub const DTYPE_OBJECT: &str = "object";

/// Fraction of null cells; zero for an empty column.
pub fn null_rate(column: &Column) -> f64 {
    if column.is_empty() {
        return 0.0;
    }
    column.null_count() as f64 / column.len() as f64
}

/// Observed storage type. Integers and booleans lose their narrow type as
/// soon as a null is present; an empty or all-null column is `float64`.
pub fn dtype(column: &Column) -> &'static str {
    let mut ints = 0usize;
    let mut floats = 0usize;
    let mut bools = 0usize;
    let mut others = 0usize;
    for cell in column.cells().iter().filter(|c| !c.is_null()) {
        match cell {
            Cell::Int(_) => ints += 1,
            Cell::Float(_) => floats += 1,
            Cell::Bool(_) => bools += 1,
            _ => others += 1,
        }
    }
    let has_nulls = column.null_count() > 0;

    if others > 0 || (bools > 0 && ints + floats > 0) {
        DTYPE_OBJECT
    } else if bools > 0 {
        if has_nulls {
            DTYPE_OBJECT
        } else {
            DTYPE_BOOL
        }
    } else if ints > 0 && floats == 0 && !has_nulls {
        DTYPE_INT
    } else {
        DTYPE_FLOAT
    }
}

#[derive(Clone, Copy)]
enum Extremum {
    Min,
    Max,
}

/// Smallest value: numeric for numeric columns, lexicographic for text
/// columns, `Null` when nothing is comparable.
pub fn min_value(column: &Column) -> MetricValue {
    extremum(column, Extremum::Min)
}

/// Largest value, under the same rules as [`min_value`].
pub fn max_value(column: &Column) -> MetricValue {
    extremum(column, Extremum::Max)
}

fn extremum(column: &Column, which: Extremum) -> MetricValue {
    let values: Vec<&Cell> = column.cells().iter().filter(|c| !c.is_null()).collect();

    if values.iter().all(|c| matches!(c, Cell::Int(_) | Cell::Float(_))) {
        let numbers = values.iter().filter_map(|c| c.as_f64());
        let picked = match which {
            Extremum::Min => numbers.reduce(f64::min),
            Extremum::Max => numbers.reduce(f64::max),
        };
        return picked.map_or(MetricValue::Null, MetricValue::Number);
    }

    if values.iter().all(|c| matches!(c, Cell::Text(_))) {
        let texts = values.iter().filter_map(|c| match c {
            Cell::Text(s) => Some(s.as_str()),
            _ => None,
        });
        let picked = match which {
            Extremum::Min => texts.min(),
            Extremum::Max => texts.max(),
        };
        return picked.map_or(MetricValue::Null, |s| MetricValue::Text(s.to_string()));
    }

    MetricValue::Null
}

#[derive(PartialEq, Eq, Hash)]
enum CellKey<'a> {
    Null,
    Bool(bool),
    Int(i64),
    Float(u64),
    Text(&'a str),
}

fn cell_key(cell: &Cell) -> CellKey<'_> {
    match cell {
        c if c.is_null() => CellKey::Null,
        Cell::Bool(b) => CellKey::Bool(*b),
        Cell::Int(i) => CellKey::Int(*i),
        // Integral floats compare equal to the matching integer.
        Cell::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
            CellKey::Int(*f as i64)
        }
        Cell::Float(f) => CellKey::Float(f.to_bits()),
        Cell::Text(s) => CellKey::Text(s),
        Cell::Null => CellKey::Null,
    }
}

/// Whether every cell is distinct. Nulls compare equal to each other.
pub fn all_unique(column: &Column) -> bool {
    let mut seen = HashSet::with_capacity(column.len());
    column.cells().iter().all(|c| seen.insert(cell_key(c)))
}

/// `0.0` when every value is unique, `1.0` otherwise.
pub fn duplicate_ratio(column: &Column) -> f64 {
    if all_unique(column) {
        0.0
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(cells: Vec<Cell>) -> Column {
        Column::new("c", cells)
    }

    #[test]
    fn dtype_rules() {
        assert_eq!(dtype(&column(vec![Cell::Int(1), Cell::Int(2)])), DTYPE_INT);
        assert_eq!(dtype(&column(vec![Cell::Int(1), Cell::Null])), DTYPE_FLOAT);
        assert_eq!(dtype(&column(vec![Cell::Int(1), Cell::Float(2.5)])), DTYPE_FLOAT);
        assert_eq!(dtype(&column(vec![Cell::Null, Cell::Null])), DTYPE_FLOAT);
        assert_eq!(dtype(&column(vec![])), DTYPE_FLOAT);
        assert_eq!(dtype(&column(vec![Cell::Bool(true)])), DTYPE_BOOL);
        assert_eq!(dtype(&column(vec![Cell::Bool(true), Cell::Null])), DTYPE_OBJECT);
        assert_eq!(dtype(&column(vec![Cell::from("TR"), Cell::Null])), DTYPE_OBJECT);
        assert_eq!(dtype(&column(vec![Cell::from("TR"), Cell::Int(1)])), DTYPE_OBJECT);
    }

    #[test]
    fn null_rate_of_empty_column_is_zero() {
        assert_eq!(null_rate(&column(vec![])), 0.0);
        assert_eq!(null_rate(&column(vec![Cell::Null, Cell::Int(1)])), 0.5);
    }

    #[test]
    fn extrema_numeric_and_text() {
        let numbers = column(vec![Cell::Int(30), Cell::Null, Cell::Float(2.5)]);
        assert_eq!(min_value(&numbers), MetricValue::Number(2.5));
        assert_eq!(max_value(&numbers), MetricValue::Number(30.0));

        let texts = column(vec![Cell::from("TR"), Cell::from("DE"), Cell::Null]);
        assert_eq!(min_value(&texts), MetricValue::Text("DE".to_string()));
        assert_eq!(max_value(&texts), MetricValue::Text("TR".to_string()));

        assert_eq!(min_value(&column(vec![Cell::Null])), MetricValue::Null);
        assert_eq!(
            max_value(&column(vec![Cell::from("a"), Cell::Int(1)])),
            MetricValue::Null
        );
    }

    #[test]
    fn uniqueness_treats_nulls_as_equal() {
        assert_eq!(duplicate_ratio(&column(vec![Cell::Int(1), Cell::Int(2)])), 0.0);
        assert_eq!(duplicate_ratio(&column(vec![Cell::Int(1), Cell::Int(1)])), 1.0);
        assert_eq!(duplicate_ratio(&column(vec![Cell::Null, Cell::Int(1)])), 0.0);
        assert_eq!(duplicate_ratio(&column(vec![Cell::Null, Cell::Null])), 1.0);
        assert_eq!(duplicate_ratio(&column(vec![Cell::Int(1), Cell::Float(1.0)])), 1.0);
        assert_eq!(duplicate_ratio(&column(vec![])), 0.0);
    }
}
