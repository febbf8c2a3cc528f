//! Driver for the inventory: opens the shop with the standard stock and
//! prints it day by day.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;

use gildedrose_inventory::{Inventory, Item};

pub const DEFAULT_DAYS: u32 = 2;
/// Consulted when no `DAYS` argument is given.
pub const DAYS_ENV: &str = "GILDEDROSE_DAYS";
/// `json` switches log lines (stderr) to JSON.
pub const LOG_FORMAT_ENV: &str = "GILDEDROSE_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub days: u32,
    pub format: OutputFormat,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            format: OutputFormat::Text,
        }
    }
}

/// Print the inventory day by day, starting from the standard stock.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "gildedrose")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Number of days to advance (falls back to GILDEDROSE_DAYS, then 2)
    #[arg(value_name = "DAYS")]
    pub days: Option<u32>,

    /// Number of days to advance, as a named option
    #[arg(long = "days", value_name = "DAYS", conflicts_with = "days")]
    pub days_flag: Option<u32>,

    /// Print each day as a JSON array instead of a text table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl Args {
    /// Resolve the run options.
    ///
    /// `env_days` is the raw value of [`DAYS_ENV`], used only when no days
    /// were given on the command line. A value that doesn't parse is logged
    /// and replaced by [`DEFAULT_DAYS`].
    pub fn into_options(self, env_days: Option<String>) -> Options {
        let days = match self.days.or(self.days_flag) {
            Some(days) => days,
            None => match env_days {
                Some(raw) => raw.parse().unwrap_or_else(|_| {
                    tracing::warn!("{DAYS_ENV}={raw:?} is not a number of days; using {DEFAULT_DAYS}");
                    DEFAULT_DAYS
                }),
                None => DEFAULT_DAYS,
            },
        };

        let format = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };

        Options { days, format }
    }
}

/// Render one day's listing.
pub fn render_day(day: u32, items: &[Item], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = format!("-------- day {day} --------\nname, sellIn, quality\n");
            for item in items {
                out.push_str(&item.to_string());
                out.push('\n');
            }
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Json => {
            let mut line = serde_json::to_string(items).context("failed to encode items")?;
            line.push('\n');
            Ok(line)
        }
    }
}

/// Print day 0 through `options.days`, ticking once between days.
pub fn run<W: Write>(mut inventory: Inventory, options: Options, out: &mut W) -> Result<()> {
    tracing::info!(days = options.days, items = inventory.len(), "running inventory");

    for day in 0..=options.days {
        if day > 0 {
            inventory.update_quality();
        }
        let rendered = render_day(day, inventory.items(), options.format)?;
        out.write_all(rendered.as_bytes())
            .context("failed to write inventory listing")?;
    }

    out.flush().context("failed to flush output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gildedrose_inventory::standard_stock;

    fn options(argv: &[&str], env_days: Option<&str>) -> Options {
        let argv = std::iter::once("gildedrose").chain(argv.iter().copied());
        Args::try_parse_from(argv)
            .unwrap()
            .into_options(env_days.map(str::to_string))
    }

    #[test]
    fn parse_defaults() {
        assert_eq!(options(&[], None), Options::default());
    }

    #[test]
    fn parse_days_and_json() {
        let options = options(&["30", "--json"], None);
        assert_eq!(options.days, 30);
        assert_eq!(options.format, OutputFormat::Json);
    }

    #[test]
    fn days_as_named_option() {
        assert_eq!(options(&["--days=3"], None).days, 3);
        assert_eq!(options(&["--days", "4", "--json"], None).days, 4);
    }

    #[test]
    fn positional_and_named_days_conflict() {
        assert!(Args::try_parse_from(["gildedrose", "3", "--days", "4"]).is_err());
    }

    #[test]
    fn help_is_displayed_not_rejected() {
        let err = Args::try_parse_from(["gildedrose", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn positional_days_wins_over_env() {
        assert_eq!(options(&["5"], Some("9")).days, 5);
    }

    #[test]
    fn env_days_used_when_no_argument() {
        assert_eq!(options(&[], Some("9")).days, 9);
    }

    #[test]
    fn bad_env_days_falls_back_to_default() {
        assert_eq!(options(&[], Some("soon")).days, DEFAULT_DAYS);
    }

    #[test]
    fn bad_days_argument_is_an_error() {
        assert!(Args::try_parse_from(["gildedrose", "soon"]).is_err());
        assert!(Args::try_parse_from(["gildedrose", "--days=-3"]).is_err());
    }

    #[test]
    fn unknown_flag_is_an_error() {
        let err = Args::try_parse_from(["gildedrose", "--yaml"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn extra_positional_is_an_error() {
        assert!(Args::try_parse_from(["gildedrose", "1", "2"]).is_err());
    }

    #[test]
    fn text_listing_for_day_zero() {
        let items = vec![Item::new("+5 Dexterity Vest", 10, 20)];
        let rendered = render_day(0, &items, OutputFormat::Text).unwrap();
        assert_eq!(
            rendered,
            "-------- day 0 --------\nname, sellIn, quality\n+5 Dexterity Vest, 10, 20\n\n"
        );
    }

    #[test]
    fn run_prints_each_day() {
        let mut out = Vec::new();
        let options = Options {
            days: 1,
            format: OutputFormat::Text,
        };
        run(Inventory::new(standard_stock()), options, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("-------- day 0 --------"));
        assert!(text.contains("-------- day 1 --------"));
        assert!(!text.contains("-------- day 2 --------"));
        assert!(text.contains("+5 Dexterity Vest, 10, 20"));
        assert!(text.contains("+5 Dexterity Vest, 9, 19"));
        assert!(text.contains("Conjured Mana Cake, 2, 4"));
    }

    #[test]
    fn run_json_emits_one_line_per_day() {
        let mut out = Vec::new();
        let options = Options {
            days: 3,
            format: OutputFormat::Json,
        };
        run(Inventory::new(standard_stock()), options, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let days: Vec<Vec<Item>> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(days.len(), 4);
        assert_eq!(days[0], standard_stock());
        assert_eq!(days[3][0], Item::new("+5 Dexterity Vest", 7, 17));
    }
}
