//! Fixed-width table rendering for record listings.

use std::io::{self, Write};

use roster_core::{format_grade, Record, Student, Worker};

/// Message printed instead of an empty worker table.
pub const EMPTY_STAFF: &str = "Список работников пуст.";

/// Cell alignment inside a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Pad on the right
    Left,
    /// Pad on the left
    Right,
}

/// A table column.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    /// Header text, always centred
    pub title: &'static str,
    /// Minimum width in characters; longer cells are not truncated
    pub width: usize,
    /// Alignment of data cells
    pub align: Align,
}

impl Column {
    const fn new(title: &'static str, width: usize, align: Align) -> Self {
        Self { title, width, align }
    }
}

/// Box-drawing helper shared by every record table.
pub struct Table {
    columns: &'static [Column],
}

impl Table {
    /// Table with the given columns.
    pub fn new(columns: &'static [Column]) -> Self {
        Self { columns }
    }

    /// Horizontal rule, e.g. `+------+-----+`.
    pub fn rule(&self) -> String {
        let dashes: Vec<String> = self.columns.iter().map(|c| "-".repeat(c.width)).collect();
        format!("+-{}-+", dashes.join("-+-"))
    }

    /// Header row with centred titles.
    pub fn header(&self) -> String {
        let cells: Vec<String> = self
            .columns
            .iter()
            .map(|c| format!("{:^width$}", c.title, width = c.width))
            .collect();
        format!("| {} |", cells.join(" | "))
    }

    /// Data row. `cells` must have one entry per column.
    pub fn row(&self, cells: &[String]) -> String {
        let cells: Vec<String> = self
            .columns
            .iter()
            .zip(cells)
            .map(|(c, text)| match c.align {
                Align::Left => format!("{:<width$}", text, width = c.width),
                Align::Right => format!("{:>width$}", text, width = c.width),
            })
            .collect();
        format!("| {} |", cells.join(" | "))
    }

    fn write_head<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.rule())?;
        writeln!(out, "{}", self.header())?;
        writeln!(out, "{}", self.rule())
    }
}

/// A record variant that can be listed as a table.
pub trait Tabular: Record {
    /// Write `rows` to `out`. Rows are already filtered for display.
    fn write_table<W: Write>(rows: &[&Self], out: &mut W) -> io::Result<()>;
}

const STUDENT_COLUMNS: &[Column] = &[
    Column::new("Ф.И.О.", 30, Align::Left),
    Column::new("Номер группы", 15, Align::Left),
    Column::new("Успеваемость", 20, Align::Left),
];

impl Tabular for Student {
    fn write_table<W: Write>(rows: &[&Self], out: &mut W) -> io::Result<()> {
        let table = Table::new(STUDENT_COLUMNS);
        table.write_head(out)?;
        for student in rows {
            let grades: Vec<String> = student.grades.iter().map(|g| format_grade(*g)).collect();
            let cells = [
                student.full_name.clone(),
                student.group_number.clone(),
                grades.join(", "),
            ];
            writeln!(out, "{}", table.row(&cells))?;
        }
        writeln!(out, "{}", table.rule())
    }
}

const WORKER_COLUMNS: &[Column] = &[
    Column::new("№", 4, Align::Right),
    Column::new("Ф.И.О.", 30, Align::Left),
    Column::new("Должность", 20, Align::Left),
    Column::new("Год", 8, Align::Right),
];

impl Tabular for Worker {
    fn write_table<W: Write>(rows: &[&Self], out: &mut W) -> io::Result<()> {
        if rows.is_empty() {
            return writeln!(out, "{}", EMPTY_STAFF);
        }

        let table = Table::new(WORKER_COLUMNS);
        table.write_head(out)?;
        for (idx, worker) in rows.iter().enumerate() {
            let cells = [
                (idx + 1).to_string(),
                worker.name.clone(),
                worker.post.clone().unwrap_or_default(),
                worker.year.unwrap_or(0).to_string(),
            ];
            writeln!(out, "{}", table.row(&cells))?;
            writeln!(out, "{}", table.rule())?;
        }
        Ok(())
    }
}
