use workshop_cli::{
    build_report, build_state, config::Config, export_target, init_tracing, run_export,
};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing(&config.log_format);
    let state = build_state(&config)?;

    let report = build_report(&state);
    println!("{}", serde_json::to_string_pretty(&report)?);

    if let Some(path) = export_target(&config, &state) {
        let written = run_export(&state, &path)?;
        tracing::info!("Exported {} accounts to {}", written, path.display());
    }
    Ok(())
}
