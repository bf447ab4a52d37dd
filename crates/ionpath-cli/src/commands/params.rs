use crate::cli::ParamsArgs;
use crate::error::Result;

/// Prints the effective bond-valence parameter table, one pair per line.
pub fn run(args: ParamsArgs) -> Result<()> {
    let table = super::load_param_table(args.params_toml.as_deref(), args.params_csv.as_deref())?;

    println!("{:<10} {:>8} {:>8}", "pair", "r0 (A)", "b (A)");
    for (key, param) in table.entries() {
        println!("{:<10} {:>8.3} {:>8.3}", key, param.r0, param.b);
    }
    Ok(())
}
