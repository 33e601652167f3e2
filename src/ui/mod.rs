// verdash console UI
// Pure rendering of summary cards, bar chart and raw-data table.

pub mod console;
