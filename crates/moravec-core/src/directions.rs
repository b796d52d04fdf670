/// The 8 unit shift directions, counter-clockwise starting east.
///
/// Both the window generator and the response probes use this set: the window
/// is grown by scaling these vectors, and every window pixel is compared
/// against its 8 neighbors along them.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];
