/// Offsets of a `width` x `height` box walked as a square spiral outward from
/// `(0, 0)`. Offsets outside the box are skipped; every in-box offset appears once.
pub fn spiral(width: i32, height: i32) -> Vec<(i32, i32)> {
    let half_w = width / 2;
    let half_h = height / 2;
    let total = (width.max(0) * height.max(0)) as usize;
    let mut result = Vec::with_capacity(total);

    let (mut x, mut y) = (0i32, 0i32);
    let (mut dx, mut dy) = (0i32, -1i32);
    let side = width.max(height).max(1);

    for _ in 0..side * side {
        if (-half_w..=half_w).contains(&x) && (-half_h..=half_h).contains(&y) {
            result.push((x, y));
        }
        // Turn at the corners of the current ring.
        if x == y || (x < 0 && x == -y) || (x > 0 && x == 1 - y) {
            let turned = (-dy, dx);
            dx = turned.0;
            dy = turned.1;
        }
        x += dx;
        y += dy;
    }

    result
}
