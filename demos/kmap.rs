use clap::Parser;

use kmap_rs::grid::Grid;
use kmap_rs::solver::minimize;
use kmap_rs::table::TableConfig;
use kmap_rs::types::Mode;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// K-map cells, row by row (rows AB = 00, 01, 11, 10), e.g. `1001/0000/0000/1001`.
    #[arg(value_name = "GRID")]
    grid: String,

    /// Minimize into a product of sums instead of a sum of products.
    #[clap(long)]
    pos: bool,

    /// Show minterm indices instead of cell values.
    #[clap(long)]
    indices: bool,

    /// Log level.
    #[clap(long, value_name = "LEVEL", default_value = "warn")]
    log_level: simplelog::LevelFilter,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let grid: Grid = args.grid.parse()?;
    let mode = if args.pos { Mode::Pos } else { Mode::Sop };
    println!("mode = {}", mode);

    let solution = minimize(&grid, mode);

    let config = TableConfig {
        show_indices: args.indices,
        ..TableConfig::default()
    };
    print!("{}", grid.to_table_string_with_config(Some(&solution), &config)?);
    println!();

    println!("{} group(s):", solution.len());
    for (i, sg) in solution.groups().iter().enumerate() {
        let group = sg.group();
        let segments = group.segments();
        print!(
            "  [{}] {} size={} color={} term={}",
            i + 1,
            group,
            group.size(),
            sg.color(),
            sg.term(mode)
        );
        if segments.len() > 1 {
            print!(" (wraps into {} segments)", segments.len());
        }
        println!();
    }

    println!("{}", solution.formula());
    println!("covers grid: {}", solution.covers_grid(&grid));

    let time_total = time_total.elapsed();
    println!("Done in {:.3} s", time_total.as_secs_f64());

    Ok(())
}
