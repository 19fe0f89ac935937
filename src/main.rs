use clap::Parser;
use seismic_design_toolbox::{app, config, ui_cli::Cli};
use tracing_subscriber::EnvFilter;

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령을 실행한다.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = try_run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: &Cli) -> Result<(), app::AppError> {
    let cfg = config::load_or_default(&cli.config)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    app::run(cli, &cfg, &mut out)
}
