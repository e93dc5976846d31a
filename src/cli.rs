// src/cli.rs
use std::{env, fs, io::Write, path::PathBuf, time::Duration};

use color_eyre::eyre::{Result, WrapErr, bail, eyre};

use crate::{
    config::{
        consts::CONFIG_FILE,
        file,
        options::{AppOptions, JsonTarget, OutputMode, SourceKind},
    },
    data::SiteData,
    net::HttpFetcher,
    progress::Progress,
    state::AppState,
};

/// Progress lines on stderr, e.g. `[2/4] models ok`.
struct CliProgress {
    total: usize,
    done: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn source_done(&mut self, source: SourceKind) {
        self.done += 1;
        eprintln!("[{}/{}] {source} ok", self.done, self.total);
    }
    fn source_failed(&mut self, source: SourceKind, reason: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {source} FAILED: {reason}", self.done, self.total);
    }
}

pub fn run() -> Result<()> {
    let opts = parse_args(env::args().skip(1))?;
    if opts.output.help {
        eprintln!(include_str!("cli_help.txt"));
        return Ok(());
    }
    crate::log::init(opts.output.verbose);

    if let Some(path) = &opts.output.write_config {
        file::save(path, &opts.sources)?;
        eprintln!("Wrote {}", path.display());
        return Ok(());
    }

    let fetcher = HttpFetcher::new(opts.sources.timeout)?;
    let mut state = AppState::new();
    let mut progress = CliProgress { total: 0, done: 0 };

    if let Err(e) = state.reload(&opts.sources, &fetcher, Some(&mut progress)) {
        bail!(e.user_message());
    }

    let mut out = std::io::stdout().lock();
    match &opts.output.mode {
        OutputMode::Summary     => print_summary(&mut out, state.data())?,
        OutputMode::Project(id) => print_project(&mut out, state.data(), id)?,
        OutputMode::Model(id)   => print_model(&mut out, state.data(), id)?,
    }

    if let Some(target) = &opts.output.json {
        let json = serde_json::to_string_pretty(state.data())?;
        match target {
            JsonTarget::Stdout => writeln!(out, "{json}")?,
            JsonTarget::File(p) => {
                fs::write(p, json).wrap_err_with(|| format!("writing {}", p.display()))?;
                eprintln!("Wrote {}", p.display());
            }
        }
    }
    Ok(())
}

/// Defaults, then the config file, then flags.
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<AppOptions> {
    let args: Vec<String> = args.into_iter().collect();

    // help must work even when the local config is broken
    if args.iter().any(|a| a == "-h" || a == "--help") {
        let mut opts = AppOptions::default();
        opts.output.help = true;
        return Ok(opts);
    }

    // --config has to be known before anything else applies on top of it
    let config_path = args
        .iter()
        .position(|a| a == "--config")
        .map(|i| args.get(i + 1).cloned().ok_or_else(|| eyre!("Missing value for --config")))
        .transpose()?
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));

    let mut opts = AppOptions { sources: file::load(&config_path)?, ..AppOptions::default() };

    let mut it = args.into_iter();
    while let Some(a) = it.next() {
        let mut value = |flag: &str| it.next().ok_or_else(|| eyre!("Missing value for {flag}"));
        match a.as_str() {
            "--config"       => { value("--config")?; }
            "--content-url"  => { let v = value("--content-url")?;  opts.sources.set_url(SourceKind::Content, &v) }
            "--projects-url" => { let v = value("--projects-url")?; opts.sources.set_url(SourceKind::Projects, &v) }
            "--models-url"   => { let v = value("--models-url")?;   opts.sources.set_url(SourceKind::Models, &v) }
            "--details-url"  => { let v = value("--details-url")?;  opts.sources.set_url(SourceKind::Details, &v) }
            "--no-details"   => opts.sources.details_url = None,
            "--timeout" => {
                let v = value("--timeout")?;
                let secs: u64 = v.parse().wrap_err_with(|| format!("Invalid --timeout: {v}"))?;
                opts.sources.timeout = Duration::from_secs(secs);
            }
            "--project" => opts.output.mode = OutputMode::Project(value("--project")?),
            "--model"   => opts.output.mode = OutputMode::Model(value("--model")?),
            "--json" => {
                let v = value("--json")?;
                opts.output.json = Some(if v == "-" { JsonTarget::Stdout } else { JsonTarget::File(PathBuf::from(v)) });
            }
            "--write-config" => opts.output.write_config = Some(PathBuf::from(value("--write-config")?)),
            "-v" | "--verbose" => opts.output.verbose = true,
            _ => bail!("Unknown arg: {a}"),
        }
    }
    Ok(opts)
}

/* ---------------- Printing ---------------- */

pub fn print_summary<W: Write>(out: &mut W, data: &SiteData) -> std::io::Result<()> {
    writeln!(out, "Content: {} keys", data.content.len())?;

    let visible: Vec<_> = data.visible_projects().collect();
    writeln!(out, "Projects ({}):", visible.len())?;
    if visible.is_empty() {
        writeln!(out, "  Ei julkaistuja kohteita")?;
    }
    for p in visible {
        writeln!(
            out,
            "  {} [{}] {}% {} {}",
            p.name, p.display_status_text(), p.progress, p.location, p.price
        )?;
    }

    writeln!(out, "Models ({}):", data.models.len())?;
    for m in data.models.iter() {
        write!(out, "  {}: {} ({})", m.id, m.title, m.meta)?;
        match data.active_project_for_model(&m.id) {
            Some(p) => writeln!(out, " | Rakennettavana: {}", p.name)?,
            None => writeln!(out)?,
        }
    }

    writeln!(out, "Project details: {} rows", data.project_details.len())
}

pub fn print_project<W: Write>(out: &mut W, data: &SiteData, id: &str) -> std::io::Result<()> {
    let groups = data.details_for_project(id);
    if groups.is_empty() {
        return writeln!(out, "Ei lisätietoja saatavilla.");
    }
    for g in groups {
        if let Some(c) = g.category {
            writeln!(out, "{c}")?;
        }
        for d in g.items {
            writeln!(out, "  {}: {}", d.label, d.value)?;
        }
    }
    Ok(())
}

pub fn print_model<W: Write>(out: &mut W, data: &SiteData, id: &str) -> Result<()> {
    let Some(m) = data.model(id) else {
        bail!("Unknown model: {id}");
    };
    writeln!(out, "{} ({})", m.title, m.size)?;
    if !m.short_desc.is_empty() {
        writeln!(out, "{}", m.short_desc)?;
    }
    for s in m.specs.iter().chain(m.detailed_specs.iter()) {
        writeln!(out, "  {}: {}", s.label, s.value)?;
    }
    for (i, img) in m.images.iter().enumerate() {
        writeln!(out, "  image {}: {img}", i + 1)?;
    }
    if let Some(p) = data.active_project_for_model(id) {
        writeln!(out, "Rakennamme tätä juuri nyt: {} ({})", p.name, p.display_link())?;
    }
    Ok(())
}
