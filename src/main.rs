mod cli;

use anyhow::{anyhow, Result};
use clap::Parser;
use cli::{AddArgs, Cli, Command, ConnArgs, MonthCommand};
use std::io;
use tdprofile::{
    connection_string, init_tracing_once, iter_months, prompt_missing, redacted, ConnectOptions, Month,
    Profile, ProfileAnswers, ProfileStore, Settings,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing_once(cli.verbose);

    let mut settings = Settings::from_env();
    if let Some(path) = &cli.profiles {
        settings = settings.with_profiles_file(path);
    }

    match cli.command {
        Command::Init => {
            let path = settings.ensure_initialized()?;
            println!("{}", path.display());
        }
        Command::List => {
            let store = ProfileStore::load(&settings.profiles_file)?;
            if store.is_empty() {
                println!("No profiles in {}", store.path().display());
            }
            for p in store.list() {
                println!("{:<16} {}", p.name, p);
            }
        }
        Command::Add(args) => add_profile(&settings, args)?,
        Command::Remove { name } => {
            let mut store = ProfileStore::load(&settings.profiles_file)?;
            store.remove(&name).ok_or_else(|| anyhow!("no profile named {name:?}"))?;
            store.save()?;
            println!("Removed {name}");
        }
        Command::Show { name, reveal } => {
            let store = ProfileStore::load(&settings.profiles_file)?;
            let p = store.get(&name).ok_or_else(|| anyhow!("no profile named {name:?}"))?;
            println!("name:     {}", p.name);
            println!("username: {}", p.username);
            println!("url:      {}", p.url);
            if reveal {
                println!("password: {}", p.password()?);
            } else {
                println!("password: ***");
            }
        }
        Command::Conn(args) => print_connection(&settings, args)?,
        Command::Month(cmd) => run_month(&settings, cmd)?,
    }
    Ok(())
}

fn add_profile(settings: &Settings, args: AddArgs) -> Result<()> {
    settings.ensure_initialized()?;
    let mut store = ProfileStore::load(&settings.profiles_file)?;

    let known = ProfileAnswers { name: args.name, username: args.username, url: args.url, password: args.password };
    let profile = match known {
        ProfileAnswers { name: Some(name), username: Some(username), url: Some(url), password: Some(password) } => {
            Profile::new(name, username, url, password)?
        }
        partial => {
            let stdin = io::stdin();
            prompt_missing(&mut stdin.lock(), &mut io::stdout(), partial)?
        }
    };

    let label = profile.to_string();
    let name = profile.name.clone();
    if args.replace {
        if store.upsert(profile).is_some() {
            tracing::info!(profile = %name, "replaced existing profile");
        }
    } else {
        store.add(profile)?;
    }
    store.save()?;
    println!("Saved {name}: {label}");
    Ok(())
}

fn print_connection(settings: &Settings, args: ConnArgs) -> Result<()> {
    let store = ProfileStore::load(&settings.profiles_file)?;
    let p = store.get(&args.name).ok_or_else(|| anyhow!("no profile named {:?}", args.name))?;
    let mut opts = ConnectOptions::default().with_driver(args.driver);
    if let Some(db) = args.database {
        opts = opts.with_database(db);
    }
    if args.reveal {
        println!("{}", connection_string(p, &opts)?);
    } else {
        println!("{}", redacted(p, &opts));
    }
    Ok(())
}

fn run_month(settings: &Settings, cmd: MonthCommand) -> Result<()> {
    match cmd {
        MonthCommand::Now => println!("{}", Month::current()?),
        MonthCommand::Key { key } => println!("{}", Month::from_key(&key)?),
        MonthCommand::Add { key, n } => println!("{}", Month::from_key(&key)?.add(n)?),
        MonthCommand::Sub { key, n } => println!("{}", Month::from_key(&key)?.subtract(n)?),
        MonthCommand::Fy { key, start } => {
            let start = start.unwrap_or(settings.fiscal_start_month);
            println!("{}", Month::from_key(&key)?.as_fiscal_year_from(start)?);
        }
        MonthCommand::Cy { key, start } => {
            let start = start.unwrap_or(settings.fiscal_start_month);
            println!("{}", Month::from_key(&key)?.as_calendar_year_from(start)?);
        }
        MonthCommand::Days { key } => {
            let m = Month::from_key(&key)?;
            println!("{} {}", m.first_day(), m.last_day());
        }
        MonthCommand::Range { from, to } => {
            let (from, to) = (Month::from_key(&from)?, Month::from_key(&to)?);
            if from > to {
                tracing::warn!("range start {} is after end {}; nothing to list", from, to);
            }
            for m in iter_months(from, to) {
                println!("{m}");
            }
        }
    }
    Ok(())
}
