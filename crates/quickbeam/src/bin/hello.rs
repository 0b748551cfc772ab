//! Minimal walkthrough program: one greeting on stdout, exit status 0.

fn main() {
    println!("Hello, world!");
}
