mod cache;
mod config;
mod diag;
mod grid;
mod paths;
mod scanner;
mod vdf;

use crate::diag::Diagnostics;
use crate::scanner::GameEntry;

use std::path::{Path, PathBuf};

const USAGE_TEXT: &str = "\
gridscout - Steam library scanner and grid artwork resolver

Usage: gridscout [MODE]

Modes:
  (default)        Scan installed games and non-Steam shortcuts, print catalog
  --shortcuts      Dump raw shortcut entries with freshly derived artwork IDs
  --grid           Report grid artwork coverage per discovered game
  --apply NAME KIND
                   Copy the cached image for a game (by exact name or app ID)
                   into its grid directory; KIND is one of
                   header, portrait, hero, logo
  --save-settings  Write the current settings to disk for hand editing
  --help           Show this text";

fn main() {
    if std::env::args().any(|arg| arg == "--help") {
        println!("{}", USAGE_TEXT);
        return;
    }

    let cfg = config::load_cfg();

    if std::env::args().any(|arg| arg == "--save-settings") {
        match config::save_cfg(&cfg) {
            Ok(()) => println!(
                "[gridscout] Settings written to {}",
                paths::PATH_GRIDSCOUT.join("settings.json").display()
            ),
            Err(e) => eprintln!("[gridscout] Failed to write settings: {}", e),
        }
        return;
    }

    let Some(steam_root) = paths::steam_root(override_from(&cfg.steam_path)) else {
        eprintln!("[gridscout] No Steam installation found (set steam_path in settings.json)");
        std::process::exit(1);
    };
    println!("[gridscout] Steam root: {}", steam_root.display());

    let userdata = paths::userdata_root(&steam_root, override_from(&cfg.userdata_path));

    if std::env::args().any(|arg| arg == "--shortcuts") {
        match &userdata {
            Some(userdata) => dump_shortcuts(userdata),
            None => eprintln!("[gridscout] No userdata directory found"),
        }
        return;
    }

    let games = scan_all(&steam_root, userdata.as_deref());

    let art_cache = if cfg.cache_dir.is_empty() {
        cache::ArtCache::default_location()
    } else {
        cache::ArtCache::new(PathBuf::from(&cfg.cache_dir))
    };

    if std::env::args().any(|arg| arg == "--grid") {
        match &userdata {
            Some(userdata) => report_grid_coverage(userdata, &art_cache, &games),
            None => eprintln!("[gridscout] No userdata directory found"),
        }
        return;
    }

    let args: Vec<String> = std::env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--apply") {
        let (Some(query), Some(kind_label)) = (args.get(pos + 1), args.get(pos + 2)) else {
            eprintln!("[gridscout] --apply needs a game name/ID and an art kind");
            std::process::exit(1);
        };
        let Some(userdata) = &userdata else {
            eprintln!("[gridscout] No userdata directory found");
            std::process::exit(1);
        };
        if let Err(e) = apply_mode(userdata, &art_cache, &games, query, kind_label) {
            eprintln!("[gridscout] Apply failed: {}", e);
            std::process::exit(1);
        }
        return;
    }

    print_catalog(&games);
}

/// Copy a cached image into the target grid directory for one game.
fn apply_mode(
    userdata: &Path,
    art_cache: &cache::ArtCache,
    games: &[GameEntry],
    query: &str,
    kind_label: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let kind = *grid::ALL_ART_KINDS
        .iter()
        .find(|kind| kind.label() == kind_label)
        .ok_or_else(|| format!("unknown art kind \"{}\"", kind_label))?;

    let game = games
        .iter()
        .find(|g| g.name == query || g.app_id == query)
        .ok_or_else(|| format!("no scanned game matches \"{}\"", query))?;

    let source = art_cache.image_path(game.lookup_id(), kind);
    if !source.is_file() {
        return Err(format!("no cached {} image for {}", kind.label(), game.lookup_id()).into());
    }

    // Grid filenames come from the derived ID, re-checked live for
    // shortcuts right before writing.
    let art_id = if game.is_steam {
        game.app_id.clone()
    } else {
        scanner::resolve_live(userdata, &game.name).unwrap_or_else(|| game.app_id.clone())
    };

    let grid_dir = grid::target_grid_dir(userdata, game)
        .ok_or("could not determine a grid directory to write to")?;
    let target = grid::apply_art(&source, &grid_dir, &art_id, kind)?;
    println!("[gridscout] Applied {} -> {}", source.display(), target.display());
    Ok(())
}

fn override_from(value: &str) -> Option<&Path> {
    (!value.is_empty()).then(|| Path::new(value))
}

fn scan_all(steam_root: &Path, userdata: Option<&Path>) -> Vec<GameEntry> {
    let mut diag = Diagnostics::new();

    let mut games = scanner::scan_installed(steam_root, &mut diag);
    if let Some(userdata) = userdata {
        games.extend(scanner::scan_shortcuts(userdata, &mut diag));
    }

    diag.report();
    games
}

fn print_catalog(games: &[GameEntry]) {
    println!("[gridscout] Found {} games", games.len());
    for game in games {
        let kind = if game.is_steam { "steam" } else { "shortcut" };
        let profile = game.user_id.as_deref().unwrap_or("-");
        println!(
            "[gridscout] {:>10}  {:<8}  profile {:<10}  {}",
            game.app_id, kind, profile, game.name
        );
    }
}

/// Raw shortcut dump: what shortcuts.vdf stores vs. what we derive.
fn dump_shortcuts(userdata: &Path) {
    let mut diag = Diagnostics::new();
    let games = scanner::scan_shortcuts(userdata, &mut diag);
    diag.report();

    for game in &games {
        println!(
            "[gridscout] profile {}: \"{}\" -> derived ID {}",
            game.user_id.as_deref().unwrap_or("?"),
            game.name,
            game.app_id
        );
        if let Some(live) = scanner::resolve_live(userdata, &game.name)
            && live != game.app_id
        {
            println!(
                "[gridscout]   live re-derivation disagrees: {} (scan is stale)",
                live
            );
        }
    }
}

/// Which grid artwork already exists for each discovered game, and which
/// slots have a downloaded image waiting in the local cache.
fn report_grid_coverage(userdata: &Path, art_cache: &cache::ArtCache, games: &[GameEntry]) {
    let dirs = grid::grid_dirs(userdata);
    println!("[gridscout] {} grid directories:", dirs.len());
    for dir in &dirs {
        println!("[gridscout]   {}", dir.display());
    }

    for game in games {
        // Prefer a live ID for shortcuts; the scanned one may be stale.
        let art_id: String = if game.is_steam {
            game.app_id.clone()
        } else {
            scanner::resolve_live(userdata, &game.name).unwrap_or_else(|| game.app_id.clone())
        };

        let Some(grid_dir) = grid::target_grid_dir(userdata, game) else {
            continue;
        };
        let found = grid::installed_art(&grid_dir, &art_id);
        let slots: Vec<&str> = found.iter().map(|(kind, _)| kind.label()).collect();
        let cached: Vec<&str> = grid::ALL_ART_KINDS
            .iter()
            .filter(|kind| art_cache.has_image(game.lookup_id(), **kind))
            .map(|kind| kind.label())
            .collect();
        println!(
            "[gridscout] {:>10}  {:<28}  on disk [{}]  cached [{}]",
            art_id,
            game.name,
            slots.join(", "),
            cached.join(", ")
        );
    }
}
