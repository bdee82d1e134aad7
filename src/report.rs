use vasca::{ParseReport, Stats};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(input: &str, report: &ParseReport, color: bool) {
    let palette = ansi::Palette::new(color);

    println!(
        "\n{}",
        palette.bold(palette.paint(format!("⚙  Total: {} m", round(report.stats.meters())), ansi::CYAN))
    );

    print_breakdown(&report.stats, &palette);

    if report.expanded != input {
        println!("\n{}", palette.paint("━━━ Expansion ━━━", ansi::GRAY));
        for line in report.expanded.lines() {
            println!("  {}", palette.dim(line));
        }
    }

    println!("\n{}", palette.paint("━━━ Parse ━━━", ansi::GRAY));
    if report.fallback {
        println!("  {}", palette.paint("lenient fallback scan used (no structured distance found)", ansi::YELLOW));
    }
    println!(
        "  Tokens: {}  │  Elapsed: {}",
        palette.paint(report.tokens.to_string(), ansi::BLUE),
        palette.paint(format!("{:?}", report.elapsed), ansi::GREEN),
    );
    println!();
}

pub fn print_section(title: &str, stats: &Stats, color: bool) {
    let palette = ansi::Palette::new(color);
    println!(
        "\n{} {}",
        palette.bold(palette.paint(title, ansi::CYAN)),
        palette.bold(format!("{} m", round(stats.meters())))
    );
    print_breakdown(stats, &palette);
}

fn print_breakdown(stats: &Stats, palette: &ansi::Palette) {
    println!("\n{}", palette.paint("━━━ Zone ━━━", ansi::GRAY));
    for (zone, meters) in stats.zones() {
        print_bucket(zone.code(), meters, palette);
    }

    println!("\n{}", palette.paint("━━━ Tipologie ━━━", ansi::GRAY));
    for (drill, meters) in stats.drills() {
        print_bucket(drill.label(), meters, palette);
    }

    println!("\n{}", palette.paint("━━━ Materiale ━━━", ansi::GRAY));
    for (gear, meters) in stats.gears() {
        print_bucket(gear.code(), meters, palette);
    }
}

fn print_bucket(label: &str, meters: f64, palette: &ansi::Palette) {
    // pad before painting so escape codes do not skew the column
    let label = format!("{label:<10}");
    let value = format!("{} m", round(meters));
    if meters > 0.0 {
        println!("  {} {}", palette.paint(label, ansi::BLUE), palette.paint(value, ansi::GREEN));
    } else {
        println!("  {} {}", palette.dim(label), palette.dim(value));
    }
}

fn round(meters: f64) -> i64 {
    meters.round() as i64
}
