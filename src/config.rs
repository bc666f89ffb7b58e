use crate::ship::ShipClass;

pub const DEFAULT_BOARD_SIZE: u32 = 10;
pub const NUM_CLASSES: usize = 5;
pub const SHIP_CLASSES: [ShipClass; NUM_CLASSES] = [
    ShipClass::new("Carrier", 5),
    ShipClass::new("Battleship", 4),
    ShipClass::new("Cruiser", 3),
    ShipClass::new("Submarine", 3),
    ShipClass::new("Destroyer", 2),
];
