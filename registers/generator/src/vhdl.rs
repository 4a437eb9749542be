// Licensed under the Apache-2.0 license

//! VHDL constant package backend.
//!
//! Renders a [`RegisterList`] into a package body for the `reg_file`
//! library:
//!
//! ```text
//! -- Automatically generated file
//! -- Generated from 1a2b3c4 on 2024-01-01 12:00.
//!
//! library reg_file;
//! use reg_file.reg_file_pkg.all;
//!
//! package sensor_regs_pkg is
//!
//!   constant sensor_conf : integer := 0;
//!
//!   constant sensor_reg_map : reg_definition_vec_t(0 to 1 - 1) := (
//!     (idx => sensor_conf, reg_type => r_w)
//!   );
//!
//!   constant sensor_conf_enable : integer := 0;
//!
//! end package;
//! ```
//!
//! Register constants carry the register index (not the byte address), bit
//! constants the bit index. Everything is emitted in append order.

use crate::meta;
use regmap_ir::RegisterList;
use std::fmt::Write;

/// Renders a register list as a VHDL constant package.
pub struct VhdlGenerator<'a> {
    register_list: &'a RegisterList,
}

impl<'a> VhdlGenerator<'a> {
    pub fn new(register_list: &'a RegisterList) -> VhdlGenerator<'a> {
        VhdlGenerator { register_list }
    }

    /// Generate the complete package text.
    pub fn get_package(&self) -> String {
        log::debug!(
            "rendering VHDL package for register list {:?} ({} registers)",
            self.register_list.name(),
            self.register_list.len()
        );

        let mut output = String::new();
        writeln!(output, "-- {}", meta::generated_info()).unwrap();
        writeln!(output, "-- {}", meta::generated_source_info()).unwrap();
        writeln!(output).unwrap();
        writeln!(output, "library reg_file;").unwrap();
        writeln!(output, "use reg_file.reg_file_pkg.all;").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "package {}_regs_pkg is", self.register_list.name()).unwrap();
        writeln!(output).unwrap();

        self.generate_register_constants(&mut output);
        self.generate_register_map(&mut output);
        self.generate_bit_constants(&mut output);

        writeln!(output, "end package;").unwrap();
        output
    }

    /// One integer constant per register, valued at the register's index.
    fn generate_register_constants(&self, output: &mut String) {
        if self.register_list.is_empty() {
            return;
        }
        let list_name = self.register_list.name();
        for register in self.register_list.iterate_registers() {
            writeln!(
                output,
                "  constant {}_{} : integer := {};",
                list_name,
                register.name(),
                register.index()
            )
            .unwrap();
        }
        writeln!(output).unwrap();
    }

    /// The aggregate mapping each register index to its mode token.
    ///
    /// An empty list still yields the constant, as a null-range array with
    /// an `others` choice.
    fn generate_register_map(&self, output: &mut String) {
        let list_name = self.register_list.name();
        writeln!(
            output,
            "  constant {}_reg_map : reg_definition_vec_t(0 to {} - 1) := (",
            list_name,
            self.register_list.len()
        )
        .unwrap();

        if self.register_list.is_empty() {
            writeln!(output, "    others => (idx => 0, reg_type => r)").unwrap();
        } else {
            let entries: Vec<String> = self
                .register_list
                .iterate_registers()
                .map(|register| {
                    format!(
                        "    (idx => {}_{}, reg_type => {})",
                        list_name,
                        register.name(),
                        register.mode().code()
                    )
                })
                .collect();
            writeln!(output, "{}", entries.join(",\n")).unwrap();
        }

        writeln!(output, "  );").unwrap();
        writeln!(output).unwrap();
    }

    /// One integer constant per bit, grouped contiguously per register.
    fn generate_bit_constants(&self, output: &mut String) {
        let list_name = self.register_list.name();
        for register in self.register_list.iterate_registers() {
            if register.bits().is_empty() {
                continue;
            }
            for bit in register.bits() {
                writeln!(
                    output,
                    "  constant {}_{}_{} : integer := {};",
                    list_name,
                    register.name(),
                    bit.name(),
                    bit.index()
                )
                .unwrap();
            }
            writeln!(output).unwrap();
        }
    }
}
