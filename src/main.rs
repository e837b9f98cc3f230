use extdot::{sdsdot, sdsdot_indexed, Float32Arena};

fn print_vector(v: &[f32], name: &str) {
    println!("{name} ({}):", v.len());
    print!("  [");
    for (i, val) in v.iter().enumerate() {
        print!("{val:.2}");
        if i < v.len() - 1 {
            print!(", ");
        }
    }
    println!("]");
}

fn main() -> extdot::Result<()> {
    println!("extdot demo: sdsdot over slices and over a managed arena\n");

    // --- Slice-backed call ---
    let x = vec![4.0f32, 2.0, -3.0, 5.0, -1.0];
    let y = vec![2.0f32, 6.0, -1.0, -4.0, 8.0];
    print_vector(&x, "x");
    print_vector(&y, "y");

    let dot = sdsdot(5, 0.0, &x[..], 1, &y[..], 1);
    println!("sdsdot(5, 0.0, x, 1, y, 1)        = {dot}");

    let biased = sdsdot(5, 10.0, &x[..], 1, &y[..], 1);
    println!("sdsdot(5, 10.0, x, 1, y, 1)       = {biased}");

    // Every other element of x against y walked backward.
    let strided = sdsdot(3, 0.0, &x[..], 2, &y[..], -1);
    println!("sdsdot(3, 0.0, x, 2, y, -1)       = {strided}");

    // --- Arena-backed call ---
    // One shared buffer backs both vectors; they are addressed by byte
    // offsets, the way a foreign engine's linear memory would be.
    let mut arena = Float32Arena::with_capacity(10);
    arena.write(0, &x)?;
    arena.write(20, &y)?;

    let ax = arena.view(0, 5)?;
    let ay = arena.view(20, 5)?;
    let arena_dot = sdsdot(5, 0.0, &ax, 1, &ay, 1);
    println!("\narena-backed sdsdot               = {arena_dot}");

    // Explicit offsets compose sub-vector windows without copying.
    let head_vs_tail = sdsdot_indexed(2, 0.0, &x[..], 1, 0, &x[..], 1, 3);
    println!("sdsdot_indexed(2, 0.0, x,1,0, x,1,3) = {head_vs_tail}");

    Ok(())
}
