//! Decorative blocks printed around console sessions: section headers, the
//! startup version header and the license notice.

use std::io::{self, Write};

use colored::Color;

use crate::{ansi, config::ConsoleConfig, utils::build_info};

/// Centers `text` in a field of `width` visible characters.
///
/// The left side gets the smaller half of the padding. Escape codes do not
/// count towards the width. Text wider than the field is returned as is.
pub fn center(text: &str, width: usize, fill: char) -> String {
    let visible = ansi::strip(text).chars().count();
    if visible >= width {
        return text.to_string();
    }
    let total = width - visible;
    let left = total / 2;
    let mut out = String::with_capacity(text.len() + total);
    out.extend(std::iter::repeat(fill).take(left));
    out.push_str(text);
    out.extend(std::iter::repeat(fill).take(total - left));
    out
}

/// Renders section headers at a fixed width.
#[derive(Debug, Clone, Copy)]
pub struct Banner {
    width: usize,
}

impl Default for Banner {
    fn default() -> Self {
        Self {
            width: ConsoleConfig::default_section_width(),
        }
    }
}

impl Banner {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    pub fn from_config(config: &ConsoleConfig) -> Self {
        Self::new(config.section_width)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Three lines: a cyan `=` rule, the centered `::: title :::`, the rule again.
    pub fn section_header(&self, title: &str) -> String {
        let rule = ansi::paint("=".repeat(self.width), Color::Cyan);
        let heading = center(&format!("::: {title} :::"), self.width, ' ');
        format!("{rule}\n{heading}\n{rule}\n")
    }

    pub fn init_message(&self, name: &str, version: &str) -> String {
        self.section_header(&format!("{name} v{version}"))
    }

    /// Version header for this build of the crate.
    pub fn init_message_for_build(&self) -> String {
        let build = build_info::current();
        self.init_message(build.name, build.version)
    }

    pub fn print_section_header(&self, out: &mut impl Write, title: &str) -> io::Result<()> {
        out.write_all(self.section_header(title).as_bytes())
    }

    pub fn print_init_message(
        &self,
        out: &mut impl Write,
        name: &str,
        version: &str,
    ) -> io::Result<()> {
        out.write_all(self.init_message(name, version).as_bytes())
    }
}

/// Copyright and warranty disclaimer shown at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub holder: String,
    pub license: String,
    pub url: String,
}

impl Notice {
    /// Notice for a program distributed under the GNU GPL.
    pub fn gpl(holder: impl Into<String>) -> Self {
        Self {
            holder: holder.into(),
            license: "GNU General Public License".into(),
            url: "https://www.gnu.org/licenses/".into(),
        }
    }

    pub fn render(&self) -> String {
        format!(
            "{}\n\nThis is free software and it comes with {}. You are welcome to \
             redistribute it under certain conditions; please refer to the {}. It \
             should be included with this software, if not, see {}\n",
            ansi::underline(ansi::bold(&self.holder)),
            ansi::paint("ABSOLUTELY NO WARRANTY", Color::Red),
            self.license,
            ansi::paint(&self.url, Color::Cyan),
        )
    }

    pub fn print(&self, out: &mut impl Write) -> io::Result<()> {
        out.write_all(self.render().as_bytes())
    }
}
