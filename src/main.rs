// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Stratbook CLI entrypoint.
//!
//! Reads and edits the strategy notebook stored under the data directory. Editing commands
//! require an admin login (`stratbook login <user> <password>`).

use std::error::Error;
use std::path::{Path, PathBuf};

use stratbook::auth::AdminAuth;
use stratbook::config::Config;
use stratbook::model::{
    BindCategory, GameMap, MapCategory, MapId, MediaKind, NewMap, NewMedia, NewStrategy,
    NewUtility, Side, StrategyId, UtilityId, UtilityKind,
};
use stratbook::query::{self, BindFilter};
use stratbook::store::{DirStorage, DocumentStore, LoadOutcome, StoreOptions};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_FILE: &str = "stratbook.toml";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--data-dir <dir>] [--config <file>] [--durable-writes] <command> [args]\n\nCommands:\n  maps [--category premiere|competitive|wingman]\n  show <map> [--side T|CT] [--type smoke|flash|grenade|molotov]\n  add-map <name> <image> <category>\n  set-image <map> <image>\n  add-strategy <map> <T|CT> <title> [--description <text>] [--media <kind> <url>]...\n  add-utility <map> <type> <title> [--side T|CT] [--description <text>] [--media <kind> <url>]...\n  delete-strategy <map> <strategy-id>\n  delete-utility <map> <utility-id>\n  select <map> | select --none\n  binds [--category <category>] [--search <text>]\n  login <username> <password>\n  logout\n  passwd <current> <new> <confirm>\n\n<map> is a map id or a map name. Editing commands require `login` first.\nIf --config is omitted, ./{DEFAULT_CONFIG_FILE} is used when present.\n--durable-writes fsyncs every write."
    );
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct MediaArg {
    kind: MediaKind,
    url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Maps {
        category: Option<MapCategory>,
    },
    Show {
        map: String,
        side: Option<Side>,
        kind: Option<UtilityKind>,
    },
    AddMap {
        name: String,
        image: String,
        category: MapCategory,
    },
    SetImage {
        map: String,
        image: String,
    },
    AddStrategy {
        map: String,
        side: Side,
        title: String,
        description: String,
        media: Vec<MediaArg>,
    },
    AddUtility {
        map: String,
        kind: UtilityKind,
        title: String,
        side: Option<Side>,
        description: String,
        media: Vec<MediaArg>,
    },
    DeleteStrategy {
        map: String,
        strategy_id: String,
    },
    DeleteUtility {
        map: String,
        utility_id: String,
    },
    Select {
        map: Option<String>,
    },
    Binds {
        filter: BindFilter,
    },
    Login {
        username: String,
        password: String,
    },
    Logout,
    Passwd {
        current: String,
        new: String,
        confirm: String,
    },
}

impl Command {
    fn requires_admin(&self) -> bool {
        matches!(
            self,
            Self::AddMap { .. }
                | Self::SetImage { .. }
                | Self::AddStrategy { .. }
                | Self::AddUtility { .. }
                | Self::DeleteStrategy { .. }
                | Self::DeleteUtility { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    data_dir: Option<String>,
    config: Option<String>,
    durable_writes: bool,
    command: Command,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut data_dir = None;
    let mut config = None;
    let mut durable_writes = false;

    let name = loop {
        let arg = args.next().ok_or(())?;
        match arg.as_str() {
            "--data-dir" => {
                if data_dir.is_some() {
                    return Err(());
                }
                data_dir = Some(args.next().ok_or(())?);
            }
            "--config" => {
                if config.is_some() {
                    return Err(());
                }
                config = Some(args.next().ok_or(())?);
            }
            "--durable-writes" => {
                if durable_writes {
                    return Err(());
                }
                durable_writes = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => break arg,
        }
    };

    let command = parse_command(&name, args)?;
    Ok(CliOptions {
        data_dir,
        config,
        durable_writes,
        command,
    })
}

/// Splits command arguments into positionals and `--flag value` pairs.
#[derive(Debug, Default)]
struct CommandArgs {
    positional: Vec<String>,
    flags: Vec<(String, String)>,
    none: bool,
}

impl CommandArgs {
    fn collect(mut args: impl Iterator<Item = String>) -> Result<Self, ()> {
        let mut out = Self::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--none" => {
                    if out.none {
                        return Err(());
                    }
                    out.none = true;
                }
                "--media" => {
                    let kind = args.next().ok_or(())?;
                    let url = args.next().ok_or(())?;
                    out.flags.push((arg, format!("{kind}\n{url}")));
                }
                _ if arg.starts_with("--") => {
                    let value = args.next().ok_or(())?;
                    out.flags.push((arg, value));
                }
                _ => out.positional.push(arg),
            }
        }
        Ok(out)
    }

    /// Takes the single value of `flag`; a repeated flag is an error.
    fn single(&mut self, flag: &str) -> Result<Option<String>, ()> {
        let mut values = self.take_all(flag);
        match values.len() {
            0 => Ok(None),
            1 => Ok(values.pop()),
            _ => Err(()),
        }
    }

    fn take_all(&mut self, flag: &str) -> Vec<String> {
        let (matching, rest): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.flags).into_iter().partition(|(f, _)| f == flag);
        self.flags = rest;
        matching.into_iter().map(|(_, value)| value).collect()
    }

    fn media(&mut self) -> Result<Vec<MediaArg>, ()> {
        self.take_all("--media")
            .into_iter()
            .map(|packed| {
                let (kind, url) = packed.split_once('\n').ok_or(())?;
                Ok(MediaArg {
                    kind: kind.parse().map_err(|_| ())?,
                    url: url.to_owned(),
                })
            })
            .collect()
    }

    /// Returns exactly `N` positionals, failing on leftover flags or arguments.
    fn finish<const N: usize>(self) -> Result<[String; N], ()> {
        if !self.flags.is_empty() || self.none {
            return Err(());
        }
        self.positional.try_into().map_err(|_| ())
    }
}

fn parse_value<T: std::str::FromStr>(value: Option<String>) -> Result<Option<T>, ()> {
    value.map(|v| v.parse().map_err(|_| ())).transpose()
}

fn parse_command(name: &str, args: impl Iterator<Item = String>) -> Result<Command, ()> {
    let mut args = CommandArgs::collect(args)?;

    let command = match name {
        "maps" => {
            let category = parse_value(args.single("--category")?)?;
            let [] = args.finish::<0>()?;
            Command::Maps { category }
        }
        "show" => {
            let side = parse_value(args.single("--side")?)?;
            let kind = parse_value(args.single("--type")?)?;
            let [map] = args.finish::<1>()?;
            Command::Show { map, side, kind }
        }
        "add-map" => {
            let [name, image, category] = args.finish::<3>()?;
            Command::AddMap {
                name,
                image,
                category: category.parse().map_err(|_| ())?,
            }
        }
        "set-image" => {
            let [map, image] = args.finish::<2>()?;
            Command::SetImage { map, image }
        }
        "add-strategy" => {
            let description = args.single("--description")?.unwrap_or_default();
            let media = args.media()?;
            let [map, side, title] = args.finish::<3>()?;
            Command::AddStrategy {
                map,
                side: side.parse().map_err(|_| ())?,
                title,
                description,
                media,
            }
        }
        "add-utility" => {
            let side = parse_value(args.single("--side")?)?;
            let description = args.single("--description")?.unwrap_or_default();
            let media = args.media()?;
            let [map, kind, title] = args.finish::<3>()?;
            Command::AddUtility {
                map,
                kind: kind.parse().map_err(|_| ())?,
                title,
                side,
                description,
                media,
            }
        }
        "delete-strategy" => {
            let [map, strategy_id] = args.finish::<2>()?;
            Command::DeleteStrategy { map, strategy_id }
        }
        "delete-utility" => {
            let [map, utility_id] = args.finish::<2>()?;
            Command::DeleteUtility { map, utility_id }
        }
        "select" => {
            if std::mem::take(&mut args.none) {
                let [] = args.finish::<0>()?;
                Command::Select { map: None }
            } else {
                let [map] = args.finish::<1>()?;
                Command::Select { map: Some(map) }
            }
        }
        "binds" => {
            let category = parse_value::<BindCategory>(args.single("--category")?)?;
            let search = args.single("--search")?;
            let [] = args.finish::<0>()?;
            Command::Binds {
                filter: BindFilter { category, search },
            }
        }
        "login" => {
            let [username, password] = args.finish::<2>()?;
            Command::Login { username, password }
        }
        "logout" => {
            let [] = args.finish::<0>()?;
            Command::Logout
        }
        "passwd" => {
            let [current, new, confirm] = args.finish::<3>()?;
            Command::Passwd {
                current,
                new,
                confirm,
            }
        }
        _ => return Err(()),
    };

    Ok(command)
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stratbook=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(options: &CliOptions) -> Result<Config, Box<dyn Error>> {
    let mut config = match options.config.as_deref() {
        Some(path) => Config::load(Path::new(path))?,
        None => Config::load_or_default(Path::new(DEFAULT_CONFIG_FILE))?,
    };
    if let Some(dir) = options.data_dir.as_deref() {
        config.storage.data_dir = PathBuf::from(dir);
    }
    if options.durable_writes {
        config.storage.durable_writes = true;
    }
    Ok(config)
}

/// Resolves a map by exact id, then by case-insensitive name.
fn resolve_map(store: &DocumentStore<DirStorage>, needle: &str) -> Result<MapId, Box<dyn Error>> {
    let maps = store.document().maps();
    maps.iter()
        .find(|m| m.map_id().as_str() == needle)
        .or_else(|| maps.iter().find(|m| m.name().eq_ignore_ascii_case(needle)))
        .map(|m| m.map_id().clone())
        .ok_or_else(|| format!("unknown map: {needle}").into())
}

fn new_media(media: Vec<MediaArg>) -> Vec<NewMedia> {
    media
        .into_iter()
        .map(|m| NewMedia::new(m.kind, m.url))
        .collect()
}

fn print_map_line(map: &GameMap, current: bool) {
    let marker = if current { "*" } else { " " };
    println!(
        "{marker} {:<14} {}  ({} strategies, {} utilities)",
        map.name(),
        map.map_id(),
        map.strategies().len(),
        map.utilities().len()
    );
}

fn print_map(map: &GameMap, side: Option<Side>, kind: Option<UtilityKind>) {
    println!("{} [{}]", map.name(), map.category().label());
    println!("  id:    {}", map.map_id());
    println!("  image: {}", map.image());

    let sides = side.map_or_else(|| vec![Side::T, Side::Ct], |s| vec![s]);
    println!("\nStrategies");
    for side in sides {
        for strategy in query::strategies_for_side(map, side) {
            println!(
                "  [{}] {}  {}",
                side.as_str(),
                strategy.title(),
                strategy.strategy_id()
            );
            if !strategy.description().is_empty() {
                println!("       {}", strategy.description());
            }
            for media in strategy.media() {
                println!("       {} {}", media.kind(), media.url());
            }
        }
    }

    let kinds = kind.map_or_else(|| UtilityKind::ALL.to_vec(), |k| vec![k]);
    println!("\nUtilities");
    for kind in kinds {
        for utility in query::utilities_for(map, kind, side) {
            let side = utility.side().map_or("--", Side::as_str);
            println!(
                "  [{side:>2}] {:<8} {}  {}",
                kind.as_str(),
                utility.title(),
                utility.utility_id()
            );
            for media in utility.media() {
                println!("       {} {}", media.kind(), media.url());
            }
        }
    }
}

fn run(options: CliOptions) -> Result<(), Box<dyn Error>> {
    let config = load_config(&options)?;
    let storage = DirStorage::new(&config.storage.data_dir)
        .with_durability(config.storage.durability());
    let store_options = StoreOptions::new().with_migration(config.migration.clone());

    let (mut store, outcome) = DocumentStore::load(storage, store_options)?;
    if let LoadOutcome::Recovered { error } = &outcome {
        eprintln!("stratbook: stored notebook was unreadable and has been reset ({error})");
    }

    let mut auth = AdminAuth::load(store.storage_mut())?;
    if options.command.requires_admin() {
        auth.require_admin()?;
    }

    match options.command {
        Command::Maps { category } => {
            if !stratbook::onboarding::is_shown(store.storage())? {
                eprintln!("Welcome to Stratbook. Use `show <map>` to read a map's notes.");
                stratbook::onboarding::mark_shown(store.storage_mut())?;
            }
            let current = store.current_map().map(|m| m.map_id().clone());
            let categories = category.map_or_else(|| MapCategory::ALL.to_vec(), |c| vec![c]);
            for category in categories {
                println!("{}", category.label());
                for map in query::maps_in_category(store.document(), category) {
                    print_map_line(map, current.as_ref() == Some(map.map_id()));
                }
            }
            let totals = query::overview(store.document());
            println!(
                "\n{} maps, {} strategies, {} utilities",
                totals.maps, totals.strategies, totals.utilities
            );
        }
        Command::Show { map, side, kind } => {
            let map_id = resolve_map(&store, &map)?;
            if let Some(map) = store.document().map(&map_id) {
                print_map(map, side, kind);
            }
        }
        Command::AddMap {
            name,
            image,
            category,
        } => {
            let map = store.add_map(NewMap::new(name, image, category))?;
            println!("{}", map.map_id());
        }
        Command::SetImage { map, image } => {
            let map_id = resolve_map(&store, &map)?;
            store.update_map_image(&map_id, image)?;
        }
        Command::AddStrategy {
            map,
            side,
            title,
            description,
            media,
        } => {
            let map_id = resolve_map(&store, &map)?;
            let mut strategy = NewStrategy::new(title, description, side);
            strategy.media = new_media(media);
            let strategy = store.add_strategy(&map_id, strategy)?;
            println!("{}", strategy.strategy_id());
        }
        Command::AddUtility {
            map,
            kind,
            title,
            side,
            description,
            media,
        } => {
            let map_id = resolve_map(&store, &map)?;
            let mut utility = NewUtility::new(kind, title, description, side);
            utility.media = new_media(media);
            let utility = store.add_utility(&map_id, utility)?;
            println!("{}", utility.utility_id());
        }
        Command::DeleteStrategy { map, strategy_id } => {
            let map_id = resolve_map(&store, &map)?;
            store.delete_strategy(&map_id, &StrategyId::new(strategy_id)?)?;
        }
        Command::DeleteUtility { map, utility_id } => {
            let map_id = resolve_map(&store, &map)?;
            store.delete_utility(&map_id, &UtilityId::new(utility_id)?)?;
        }
        Command::Select { map } => {
            let map_id = map.map(|m| resolve_map(&store, &m)).transpose()?;
            store.set_current_map(map_id)?;
        }
        Command::Binds { filter } => {
            let binds = store.document().binds();
            let catalogue;
            let binds = if binds.is_empty() {
                catalogue = stratbook::model::default_binds();
                &catalogue[..]
            } else {
                binds
            };
            for bind in query::filter_binds(binds, &filter) {
                println!(
                    "{:<14} {:<32} {}",
                    bind.category().as_str(),
                    bind.console_line(),
                    bind.description()
                );
            }
        }
        Command::Login { username, password } => {
            if auth.login(store.storage_mut(), &username, &password)? {
                println!("logged in as {username}");
            } else {
                return Err("invalid username or password".into());
            }
        }
        Command::Logout => {
            auth.logout(store.storage_mut())?;
            println!("logged out");
        }
        Command::Passwd {
            current,
            new,
            confirm,
        } => {
            auth.change_password(store.storage_mut(), &current, &new, &confirm)?;
            println!("password updated");
        }
    }

    Ok(())
}

fn main() {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "stratbook".to_owned());

    let options = match parse_options(args) {
        Ok(options) => options,
        Err(()) => {
            print_usage(&program);
            std::process::exit(2);
        }
    };

    init_tracing();

    if let Err(err) = run(options) {
        eprintln!("stratbook: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, CliOptions, Command, MediaArg};
    use stratbook::model::{BindCategory, MapCategory, MediaKind, Side, UtilityKind};

    fn parse(args: &[&str]) -> Result<CliOptions, ()> {
        parse_options(args.iter().map(|s| (*s).to_owned()))
    }

    #[test]
    fn rejects_empty_args() {
        parse(&[]).unwrap_err();
    }

    #[test]
    fn parses_global_flags_before_command() {
        let options = parse(&["--data-dir", "notes", "--durable-writes", "maps"]).expect("parse");
        assert_eq!(options.data_dir.as_deref(), Some("notes"));
        assert!(options.durable_writes);
        assert_eq!(options.config, None);
        assert_eq!(options.command, Command::Maps { category: None });
    }

    #[test]
    fn rejects_duplicate_global_flags() {
        parse(&["--durable-writes", "--durable-writes", "maps"]).unwrap_err();
        parse(&["--config", "a.toml", "--config", "b.toml", "maps"]).unwrap_err();
    }

    #[test]
    fn rejects_missing_flag_value() {
        parse(&["--data-dir"]).unwrap_err();
        parse(&["binds", "--search"]).unwrap_err();
    }

    #[test]
    fn rejects_unknown_commands_and_flags() {
        parse(&["frobnicate"]).unwrap_err();
        parse(&["--nope", "maps"]).unwrap_err();
        parse(&["maps", "--nope", "x"]).unwrap_err();
    }

    #[test]
    fn parses_maps_category() {
        let options = parse(&["maps", "--category", "wingman"]).expect("parse");
        assert_eq!(
            options.command,
            Command::Maps {
                category: Some(MapCategory::Wingman)
            }
        );
        parse(&["maps", "--category", "casual"]).unwrap_err();
    }

    #[test]
    fn parses_show_filters() {
        let options = parse(&["show", "Dust 2", "--side", "ct", "--type", "smoke"]).expect("parse");
        assert_eq!(
            options.command,
            Command::Show {
                map: "Dust 2".to_owned(),
                side: Some(Side::Ct),
                kind: Some(UtilityKind::Smoke),
            }
        );
    }

    #[test]
    fn parses_add_strategy_with_media() {
        let options = parse(&[
            "add-strategy",
            "Mirage",
            "T",
            "A execute",
            "--media",
            "youtube",
            "https://youtu.be/abc",
            "--description",
            "Fast",
            "--media",
            "image",
            "/a.png",
        ])
        .expect("parse");
        assert_eq!(
            options.command,
            Command::AddStrategy {
                map: "Mirage".to_owned(),
                side: Side::T,
                title: "A execute".to_owned(),
                description: "Fast".to_owned(),
                media: vec![
                    MediaArg {
                        kind: MediaKind::Youtube,
                        url: "https://youtu.be/abc".to_owned(),
                    },
                    MediaArg {
                        kind: MediaKind::Image,
                        url: "/a.png".to_owned(),
                    },
                ],
            }
        );
    }

    #[test]
    fn add_utility_side_is_optional() {
        let options = parse(&["add-utility", "Mirage", "flash", "Pop"]).expect("parse");
        let Command::AddUtility { side, kind, .. } = options.command else {
            panic!("expected add-utility");
        };
        assert_eq!(side, None);
        assert_eq!(kind, UtilityKind::Flash);
    }

    #[test]
    fn rejects_wrong_positional_counts() {
        parse(&["add-map", "Cache", "/cache.jpg"]).unwrap_err();
        parse(&["delete-strategy", "Mirage"]).unwrap_err();
        parse(&["logout", "now"]).unwrap_err();
    }

    #[test]
    fn parses_select_none() {
        let options = parse(&["select", "--none"]).expect("parse");
        assert_eq!(options.command, Command::Select { map: None });
        parse(&["select", "--none", "Mirage"]).unwrap_err();
    }

    #[test]
    fn parses_binds_filter() {
        let options = parse(&["binds", "--category", "movement", "--search", "jump"]).expect("parse");
        let Command::Binds { filter } = options.command else {
            panic!("expected binds");
        };
        assert_eq!(filter.category, Some(BindCategory::Movement));
        assert_eq!(filter.search.as_deref(), Some("jump"));
    }

    #[test]
    fn only_editing_commands_require_admin() {
        assert!(parse(&["add-map", "Cache", "/c.jpg", "competitive"])
            .expect("parse")
            .command
            .requires_admin());
        assert!(!parse(&["maps"]).expect("parse").command.requires_admin());
        assert!(!parse(&["select", "--none"]).expect("parse").command.requires_admin());
        assert!(!parse(&["select", "m1"])
            .expect("parse")
            .command
            .requires_admin());
        assert!(!parse(&["passwd", "a", "b", "b"])
            .expect("parse")
            .command
            .requires_admin());
    }
}
