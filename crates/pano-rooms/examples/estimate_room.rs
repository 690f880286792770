use pano_rooms::{estimate_room_from_json, RoomParams};

#[cfg(feature = "tracing")]
use pano_rooms::core::init_tracing;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing")]
    init_tracing(false);

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("Usage: estimate_room <layout_json_path>");
        return Ok(());
    };

    let payload = std::fs::read_to_string(path)?;
    let estimate = estimate_room_from_json(&payload, &RoomParams::default())?;

    println!("corners: {}", estimate.corners.len());
    println!("wall depths: {:?}", estimate.wall_depths);
    println!(
        "length {} m, breadth {} m, area {} m^2",
        estimate.dimensions.length(),
        estimate.dimensions.breadth(),
        estimate.dimensions.area()
    );

    Ok(())
}
