//! # Option Metadata
//!
//! Commands declare their options as a static list of [`OptionDescriptor`]s
//! and hand out a [`Field`] handle for each one by name. [`options_of`]
//! combines the two into [`OptionEntry`]s: the descriptor, the kind read off
//! the field handle, and whether the option is listed in help.
//!
//! Inspection fails fast with [`CommandLineError::OptionWithoutSetter`] when a
//! declared option cannot be written: either the command has no field for it,
//! or the descriptor is read-only and the field is not a collection or map
//! (read-only multi-valued fields are extended in place).

use crate::coerce::{Field, OptionKind};
use crate::error::CommandLineError;
use crate::matching::Named;
use crate::registry::Command;

/// Declaration of one bindable option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionDescriptor {
    /// Primary name; also the name the command's `field` lookup answers to.
    pub name: &'static str,
    pub alt_name: Option<&'static str>,
    pub description: &'static str,
    /// The field has no setter and can only be extended.
    pub read_only: bool,
}

impl OptionDescriptor {
    pub const fn new(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            alt_name: None,
            description,
            read_only: false,
        }
    }

    pub const fn alias(mut self, alt_name: &'static str) -> Self {
        self.alt_name = Some(alt_name);
        self
    }

    pub const fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }
}

impl Named for OptionDescriptor {
    fn primary_name(&self) -> &str {
        self.name
    }

    fn alt_name(&self) -> Option<&str> {
        self.alt_name
    }
}

/// An inspected option, ready for binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry {
    pub descriptor: OptionDescriptor,
    pub kind: OptionKind,
    pub in_help: bool,
}

impl Named for OptionEntry {
    fn primary_name(&self) -> &str {
        self.descriptor.name
    }

    fn alt_name(&self) -> Option<&str> {
        self.descriptor.alt_name
    }
}

/// Lists the bindable options of `command` in declaration order.
pub fn options_of(command: &mut dyn Command) -> Result<Vec<OptionEntry>, CommandLineError> {
    let command_name = command
        .metadata()
        .map(|metadata| metadata.name)
        .unwrap_or("<unnamed>");

    let mut entries = Vec::new();
    for descriptor in command.options() {
        let without_setter = || CommandLineError::OptionWithoutSetter {
            field: format!("{}.{}", command_name, descriptor.name),
        };

        let kind = command
            .field(descriptor.name)
            .map(|field| field.kind())
            .ok_or_else(without_setter)?;
        if descriptor.read_only && !kind.is_multi_valued() {
            return Err(without_setter());
        }

        entries.push(OptionEntry {
            descriptor,
            kind,
            in_help: command.included_in_help(descriptor.name),
        });
    }
    Ok(entries)
}

/// Looks up the field handle for an inspected option.
pub(crate) fn field_of<'c>(
    command: &'c mut dyn Command,
    entry: &OptionEntry,
) -> Result<Field<'c>, CommandLineError> {
    let command_name = command
        .metadata()
        .map(|metadata| metadata.name)
        .unwrap_or("<unnamed>");
    command
        .field(entry.descriptor.name)
        .ok_or_else(|| CommandLineError::OptionWithoutSetter {
            field: format!("{}.{}", command_name, entry.descriptor.name),
        })
}
