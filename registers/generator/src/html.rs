// Licensed under the Apache-2.0 license

//! HTML documentation backend.
//!
//! Two variants share identical row content: [`HtmlGenerator::get_table`]
//! renders the register table alone, for embedding into a larger document,
//! and [`HtmlGenerator::get_page`] wraps the same table in a full page with
//! provenance metadata and a legend of the register modes.
//!
//! Each register becomes one row (bold name, 4-hex-digit byte address, mode
//! label, description), immediately followed by one indented row per bit
//! (italic name, bit index, empty mode cell, description). Descriptions are
//! passed through the inline-markup translator.

use crate::markdown;
use crate::meta;
use regmap_ir::{Mode, RegisterList};
use std::fmt::Write;

/// Renders a register list as HTML documentation.
pub struct HtmlGenerator<'a> {
    register_list: &'a RegisterList,
}

impl<'a> HtmlGenerator<'a> {
    pub fn new(register_list: &'a RegisterList) -> HtmlGenerator<'a> {
        HtmlGenerator { register_list }
    }

    /// Generate the register table.
    pub fn get_table(&self) -> String {
        log::debug!(
            "rendering HTML table for register list {:?} ({} registers)",
            self.register_list.name(),
            self.register_list.len()
        );

        let mut output = String::new();
        writeln!(output, "<table>").unwrap();
        writeln!(output, "<thead>").unwrap();
        writeln!(output, "  <tr>").unwrap();
        writeln!(output, "    <th>Name</th>").unwrap();
        writeln!(output, "    <th>Address</th>").unwrap();
        writeln!(output, "    <th>Mode</th>").unwrap();
        writeln!(output, "    <th>Description</th>").unwrap();
        writeln!(output, "  </tr>").unwrap();
        writeln!(output, "</thead>").unwrap();
        writeln!(output, "<tbody>").unwrap();
        self.generate_rows(&mut output);
        writeln!(output, "</tbody>").unwrap();
        writeln!(output, "</table>").unwrap();
        output
    }

    /// Generate a complete page: provenance notice, register table and mode
    /// legend inside a document shell.
    pub fn get_page(&self) -> String {
        let list_name = self.register_list.name();

        let mut output = String::new();
        writeln!(output, "<!DOCTYPE html>").unwrap();
        writeln!(output, "<!-- {} -->", meta::generated_info()).unwrap();
        writeln!(output, "<!-- {} -->", meta::generated_source_info()).unwrap();
        writeln!(output, "<html>").unwrap();
        writeln!(output, "<head>").unwrap();
        writeln!(output, "  <title>Registers for {list_name}</title>").unwrap();
        writeln!(output, "  <style>").unwrap();
        writeln!(output, "    table {{ border-collapse: collapse; }}").unwrap();
        writeln!(
            output,
            "    th, td {{ border: 1px solid black; padding: 4px; }}"
        )
        .unwrap();
        writeln!(output, "  </style>").unwrap();
        writeln!(output, "</head>").unwrap();
        writeln!(output, "<body>").unwrap();
        writeln!(output, "<h1>Registers for {list_name}</h1>").unwrap();
        writeln!(
            output,
            "<p>{}. {}</p>",
            meta::generated_info(),
            meta::generated_source_info()
        )
        .unwrap();
        output.push_str(&self.get_table());
        self.generate_mode_legend(&mut output);
        writeln!(output, "</body>").unwrap();
        writeln!(output, "</html>").unwrap();
        output
    }

    /// Register and bit rows, in append order.
    fn generate_rows(&self, output: &mut String) {
        for register in self.register_list.iterate_registers() {
            writeln!(output, "  <tr>").unwrap();
            writeln!(output, "    <td><strong>{}</strong></td>", register.name()).unwrap();
            writeln!(output, "    <td>{}</td>", register.address_str()).unwrap();
            writeln!(output, "    <td>{}</td>", register.mode().label()).unwrap();
            writeln!(
                output,
                "    <td>{}</td>",
                markdown::translate(register.description())
            )
            .unwrap();
            writeln!(output, "  </tr>").unwrap();

            for bit in register.bits() {
                writeln!(output, "  <tr>").unwrap();
                writeln!(
                    output,
                    "    <td>&nbsp;&nbsp;<em>{}</em></td>",
                    bit.name()
                )
                .unwrap();
                writeln!(output, "    <td>{}</td>", bit.index()).unwrap();
                writeln!(output, "    <td></td>").unwrap();
                writeln!(
                    output,
                    "    <td>{}</td>",
                    markdown::translate(bit.description())
                )
                .unwrap();
                writeln!(output, "  </tr>").unwrap();
            }
        }
    }

    /// Legend of all register modes and their PS/PL semantics.
    fn generate_mode_legend(&self, output: &mut String) {
        writeln!(output, "<h2>Register modes</h2>").unwrap();
        writeln!(output, "<table>").unwrap();
        writeln!(output, "<thead>").unwrap();
        writeln!(output, "  <tr>").unwrap();
        writeln!(output, "    <th>Mode</th>").unwrap();
        writeln!(output, "    <th>Description</th>").unwrap();
        writeln!(output, "  </tr>").unwrap();
        writeln!(output, "</thead>").unwrap();
        writeln!(output, "<tbody>").unwrap();
        for mode in Mode::ALL {
            writeln!(output, "  <tr>").unwrap();
            writeln!(output, "    <td>{}</td>", mode.label()).unwrap();
            writeln!(output, "    <td>{}</td>", mode.describe()).unwrap();
            writeln!(output, "  </tr>").unwrap();
        }
        writeln!(output, "</tbody>").unwrap();
        writeln!(output, "</table>").unwrap();
    }
}
