use comfy_table::{
    ContentArrangement, Row, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL_CONDENSED,
};

/// Table printed to stdout, styled the same way for every command
pub(crate) struct TableReporter {
    table: Table,
}

impl TableReporter {
    pub(crate) fn new() -> Self {
        Self {
            table: Table::new(),
        }
    }

    pub(crate) fn setup(&mut self, header: Vec<&'static str>) -> &mut Self {
        self.table
            .load_preset(UTF8_FULL_CONDENSED)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(header);

        self
    }

    pub(crate) fn add_row<T: Into<Row>>(&mut self, row: T) -> &mut Self {
        self.table.add_row(row);
        self
    }

    pub(crate) fn print(&self) {
        println!("{}", &self.table);
    }
}
