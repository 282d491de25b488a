//! Report rendering.

use std::fmt::Display;
use std::io::{self, Write};

use serde::Serialize;
use typecov_chart::{Type, TypeTag};
use typecov_coverage::{ComboIndex, CoverageTable, IndexEntry, MemberReport, TeamReport};
use typecov_team::TeamEntry;

use crate::config::OutputFormat;

/// Width of one coverage column
const CELL: usize = 15;

/// Indent in front of the coverage table rows
const GUTTER: &str = "\t\t\t\t\t\t\t|";

const BANNER: &str = "** Starting Program!\n** Ensure input file is current.";

/// Writes a team report in the configured format.
pub struct Formatter {
    format: OutputFormat,
    quiet: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    index: Option<&'a ComboIndex>,
    #[serde(flatten)]
    report: &'a TeamReport,
}

impl Formatter {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    /// Write the whole report; `index` is dumped when given.
    pub fn write(
        &self,
        out: &mut impl Write,
        team: &[TeamEntry],
        report: &TeamReport,
        index: Option<&ComboIndex>,
    ) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => {
                let json = JsonReport { index, report };
                serde_json::to_writer_pretty(&mut *out, &json)?;
                writeln!(out)
            }
            OutputFormat::Table => self.write_table(out, team, report, index),
        }
    }

    fn write_table(
        &self,
        out: &mut impl Write,
        team: &[TeamEntry],
        report: &TeamReport,
        index: Option<&ComboIndex>,
    ) -> io::Result<()> {
        if !self.quiet {
            writeln!(out, "\n{BANNER}\n\n")?;
            writeln!(out, "\nT E A M : {}\n", team_list(team))?;
        }

        if let Some(index) = index {
            write_index(out, index)?;
        }

        let mut number = 1;
        for member in &report.members {
            number = write_member(out, number, member)?;
        }

        write_summary(out, &report.without_stab)
    }
}

/// Write one member block and its coverage table; returns the next member number.
pub fn write_member(out: &mut impl Write, number: usize, report: &MemberReport) -> io::Result<usize> {
    let name = format!(" P K M N {number} :  {} ", report.member);
    let dash = "-".repeat(name.chars().count());
    let profile = &report.profile;

    writeln!(out, "\n{dash}\n{name}\t\n{dash}")?;
    writeln!(
        out,
        "\tstrengths:\t\t\t{}\t| {}",
        profile.strengths.len(),
        list(&profile.strengths)
    )?;
    writeln!(
        out,
        "\tuncovered:\t\t\t{}\t| {}",
        report.uncovered.len(),
        list(&report.uncovered)
    )?;
    writeln!(
        out,
        "\tweaknesses:\t\t\t{}\t| {}",
        profile.weaknesses.len(),
        list(&profile.weaknesses)
    )?;
    writeln!(
        out,
        "\tresistances:\t\t{}\t| {}",
        profile.resistances.len(),
        list(&profile.resistances)
    )?;
    writeln!(
        out,
        "\timmunities:\t\t\t{}\t| {}\n",
        profile.immunities.len(),
        list(&profile.immunities)
    )?;

    write_coverage(out, &report.coverage)?;
    Ok(number + 1)
}

/// Write the STAB/coverage-options table.
pub fn write_coverage(out: &mut impl Write, table: &CoverageTable) -> io::Result<()> {
    let header = table.header();
    let title_width = if header.len() > 5 { 2 * CELL } else { CELL };
    let title_row = ["STAB Damage ", "Coverage Options "]
        .iter()
        .map(|title| format!("{title:<title_width$}"))
        .collect::<Vec<_>>()
        .join(" |");
    let header_row = cells(&header);
    let rule = "-".repeat(header_row.chars().count());

    writeln!(out, "\tC O V E R A G E :\t\t|  {title_row}")?;
    writeln!(out, "{GUTTER}  {header_row}")?;
    writeln!(out, "{GUTTER}  {rule}")?;
    for row in table.rows() {
        writeln!(out, "{GUTTER}  {}", cells(&row))?;
    }
    writeln!(out, "{GUTTER}  {rule} \n\n")
}

/// Write the closing team summary.
pub fn write_summary(out: &mut impl Write, without_stab: &[Type]) -> io::Result<()> {
    writeln!(
        out,
        "\n\n\t** {} types don't do stab damage: {} **\n",
        without_stab.len(),
        list(without_stab)
    )
}

/// Write the four category lists of a combo index.
pub fn write_index(out: &mut impl Write, index: &ComboIndex) -> io::Result<()> {
    let categories: [(&str, &[IndexEntry]); 4] = [
        ("combo_strengths", &index.strengths),
        ("combo_weakness", &index.weaknesses),
        ("combo_resisted", &index.resistances),
        ("combo_immune", &index.immunities),
    ];

    for (title, entries) in categories {
        writeln!(out, "\n{title}: {} combos", entries.len())?;
        for entry in entries {
            writeln!(out, "\t{:<20}{}\t| {}", entry.combo.to_string(), entry.types.len(), list(&entry.types))?;
        }
    }
    writeln!(out)
}

fn cells(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("{item:<CELL$}"))
        .collect::<Vec<_>>()
        .join("|")
}

/// `['a', 'b']`
fn list<'a, T: Display + 'a>(items: impl IntoIterator<Item = &'a T>) -> String {
    let quoted: Vec<String> = items.into_iter().map(|item| format!("'{item}'")).collect();
    format!("[{}]", quoted.join(", "))
}

/// `[['fire', None], ['ghost', 'dark']]`
fn team_list(team: &[TeamEntry]) -> String {
    let members: Vec<String> = team
        .iter()
        .map(|entry| {
            let second = entry
                .secondary
                .as_ref()
                .map_or_else(|| "None".to_string(), |tag: &TypeTag| format!("'{tag}'"));
            format!("['{}', {second}]", entry.primary)
        })
        .collect();
    format!("[{}]", members.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use typecov_chart::{Type, TypeTag};
    use typecov_coverage::{CoverageContext, Member};

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn entry(line: usize, primary: &str, secondary: Option<&str>) -> TeamEntry {
        TeamEntry {
            line,
            primary: TypeTag::parse(primary),
            secondary: secondary.map(TypeTag::parse),
        }
    }

    #[test]
    fn test_member_block() {
        let context = CoverageContext::standard();
        let report = context.analyze_member(&Member::single(Type::Fire));

        let mut next = 0;
        let text = render(|out| {
            next = write_member(out, 1, &report)?;
            Ok(())
        });

        assert_eq!(next, 2);
        let dash = "-".repeat(19);
        assert!(text.starts_with(&format!("\n{dash}\n P K M N 1 :  fire \t\n{dash}\n")));
        assert!(text.contains("\tstrengths:\t\t\t4\t| ['grass', 'ice', 'bug', 'steel']\n"));
        assert!(text.contains("\tweaknesses:\t\t\t3\t| ['water', 'ground', 'rock']\n"));
        assert!(text.contains("\timmunities:\t\t\t0\t| []\n\n"));
    }

    #[test]
    fn test_coverage_table_layout() {
        let context = CoverageContext::standard();
        let report = context.analyze_member(&Member::single(Type::Fire));
        let text = render(|out| write_coverage(out, &report.coverage));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            format!("\tC O V E R A G E :\t\t|  {:<15} |Coverage Options ", "STAB Damage ")
        );
        let header = ["fire", "ground", "rock", "fighting", "water"].map(|name| format!("{name:<15}"));
        assert_eq!(lines[1], format!("\t\t\t\t\t\t\t|  {}", header.join("|")));
        assert_eq!(lines[2], format!("\t\t\t\t\t\t\t|  {}", "-".repeat(79)));
        assert!(lines[3].starts_with("\t\t\t\t\t\t\t|  88 weak to     |76 weak to"));
        assert!(lines[5].ends_with("|19 immune      |0 immune       "));
        assert_eq!(lines[6], format!("{} ", lines[2]));
    }

    #[test]
    fn test_wide_table_title() {
        let context = CoverageContext::standard();
        let report = context.analyze_member(&Member::pair(Type::Ghost, Type::Dark));
        let text = render(|out| write_coverage(out, &report.coverage));

        let title = format!("{:<30} |{:<30}", "STAB Damage ", "Coverage Options ");
        assert!(text.starts_with(&format!("\tC O V E R A G E :\t\t|  {title}\n")));
    }

    #[test]
    fn test_summary() {
        let text = render(|out| write_summary(out, &[Type::Normal, Type::Fairy]));
        assert_eq!(text, "\n\n\t** 2 types don't do stab damage: ['normal', 'fairy'] **\n\n");
    }

    #[test]
    fn test_team_list() {
        let team = [entry(1, "fire", None), entry(2, "ghost", Some("dark"))];
        assert_eq!(team_list(&team), "[['fire', None], ['ghost', 'dark']]");
    }

    #[test]
    fn test_quiet_table_skips_banner() {
        let context = CoverageContext::standard();
        let team = [entry(1, "fire", None)];
        let report = context.analyze_team(&[Member::single(Type::Fire)]);

        let text = render(|out| Formatter::new(OutputFormat::Table, true).write(out, &team, &report, None));
        assert!(!text.contains("Starting Program"));
        assert!(text.contains("P K M N 1"));
        assert!(text.contains("** 17 types don't do stab damage"));

        let text = render(|out| Formatter::new(OutputFormat::Table, false).write(out, &team, &report, None));
        assert!(text.contains("T E A M : [['fire', None]]"));
    }

    #[test]
    fn test_json_output() {
        let context = CoverageContext::standard();
        let team = [entry(1, "fire", None)];
        let report = context.analyze_team(&[Member::single(Type::Fire)]);

        let text = render(|out| Formatter::new(OutputFormat::Json, false).write(out, &team, &report, None));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["members"][0]["member"][0], "fire");
        assert_eq!(value["members"][0]["coverage"]["stab"][0]["weak"], 88);
        assert_eq!(value["without_stab"].as_array().unwrap().len(), 17);
        assert!(value.get("index").is_none());
    }

    #[test]
    fn test_index_dump() {
        let context = CoverageContext::standard();
        let text = render(|out| write_index(out, context.index()));
        assert!(text.contains("\ncombo_weakness: 306 combos\n"));
        assert!(text.contains("\ncombo_immune: 306 combos\n"));
    }
}
