mod csv_table;
mod table_writer;

pub use csv_table::{field, Table};
pub use table_writer::{optional_field, TableWriter};
