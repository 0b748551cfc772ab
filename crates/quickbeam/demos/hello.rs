//! Walkthrough demo: greeting plus two tiny helper routines.

const EXIT_OK: i32 = 0;

fn main() {
    println!("Hello, world!");
    std::process::exit(EXIT_OK);
}

fn add(x: i32, y: i32, z: f32) -> i32 {
    if x > 0 {
        z as i32
    } else if y <= 0 && z >= 100.0 {
        x * 2 * y
    } else {
        0
    }
}

fn strlength(seq: &[u8]) -> usize {
    let mut i = 0;
    while seq[i] != 0 {
        i += 1;
    }
    i
}
