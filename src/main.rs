use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use floormark::{
    init_logging, parse_plan_text, BuildingCatalog, Editor, ImageInfo, RoomTypeRegistry, VERSION,
};

#[derive(Parser)]
#[command(name = "floormark")]
#[command(about = "Floor plan annotation toolkit", version)]
struct Cli {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Load a building catalog and print its hierarchy
    Catalog {
        /// Path to the catalog JSON file
        #[arg(long)]
        file: PathBuf,
    },
    /// Validate a plan coordinate file and print a summary
    Check {
        /// Path to the plan coordinate text file
        #[arg(long)]
        file: PathBuf,
    },
    /// Render a marked-up plan to a standalone HTML page
    Render {
        /// Path to the catalog JSON file
        #[arg(long)]
        catalog: PathBuf,
        /// Building id to select
        #[arg(long)]
        building: String,
        /// Floor id to select
        #[arg(long)]
        floor: String,
        /// Floor plan raster image, used for the canvas dimensions
        #[arg(long)]
        image: PathBuf,
        /// Plan coordinate text file to import
        #[arg(long)]
        coords: PathBuf,
        /// Output path (defaults to plan_<building>_<floor>.html)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    init_logging()?;
    tracing::debug!(version = VERSION, "floormark starting");

    let cli = Cli::parse();
    match cli.action {
        Action::Catalog { file } => catalog(&file),
        Action::Check { file } => check(&file),
        Action::Render {
            catalog,
            building,
            floor,
            image,
            coords,
            out,
        } => render(&catalog, &building, &floor, &image, &coords, out),
    }
}

fn catalog(file: &Path) -> Result<()> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read catalog file {}", file.display()))?;
    let mut registry = RoomTypeRegistry::default();
    let stock_types = registry.len();
    let catalog = BuildingCatalog::from_json(&json, &mut registry)?;

    for building in catalog.buildings() {
        println!("{} ({})", building.name, building.id);
        for floor in &building.floors {
            println!(
                "  {} ({}) - {} declared room(s)",
                floor.name,
                floor.id,
                floor.rooms.len()
            );
            for room in &floor.rooms {
                println!(
                    "    [{}] {} - {} {}",
                    room.id, room.name, room.room_type, room.color
                );
            }
        }
    }

    if registry.len() > stock_types {
        println!();
        println!("Room types added by the catalog:");
        for (room_type, color) in registry.iter().skip(stock_types) {
            println!("  {room_type} {color}");
        }
    }
    Ok(())
}

fn check(file: &Path) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read plan file {}", file.display()))?;
    let registry = RoomTypeRegistry::default();
    let parsed = parse_plan_text(&content, &registry)
        .with_context(|| format!("Invalid plan file {}", file.display()))?;

    println!("Boundary: {} points", parsed.boundary.len());
    println!("Rooms: {}", parsed.rooms.len());
    for room in &parsed.rooms {
        match room.external_id.as_deref() {
            Some(id) => println!(
                "  {} ({}) [{}] - {} points",
                room.name,
                room.room_type,
                id,
                room.points.len()
            ),
            None => println!(
                "  {} ({}) - {} points",
                room.name,
                room.room_type,
                room.points.len()
            ),
        }
    }
    Ok(())
}

fn render(
    catalog_path: &Path,
    building: &str,
    floor: &str,
    image_path: &Path,
    coords_path: &Path,
    out: Option<PathBuf>,
) -> Result<()> {
    let mut editor = Editor::new();

    let json = std::fs::read_to_string(catalog_path)
        .with_context(|| format!("Failed to read catalog file {}", catalog_path.display()))?;
    editor.import_catalog(&json)?;
    editor.select_building(building)?;
    editor.select_floor(floor)?;

    let (width, height) = image::image_dimensions(image_path)
        .with_context(|| format!("Failed to read image {}", image_path.display()))?;
    editor.attach_image(ImageInfo::new(width, height))?;

    let coords = std::fs::read_to_string(coords_path)
        .with_context(|| format!("Failed to read plan file {}", coords_path.display()))?;
    let summary = editor.import_text(&coords)?;
    tracing::info!(
        boundary_points = summary.boundary_points,
        rooms = summary.rooms,
        "plan imported"
    );

    let out_path = match out {
        Some(path) => path,
        None => PathBuf::from(editor.html_export_filename()?),
    };
    editor.save_html_to(&out_path)?;
    println!("Wrote {}", out_path.display());
    Ok(())
}
