use crate::geometry::Shape;

/// Drop every polygon enclosed by another surviving one.
///
/// Quadratic. A polygon already marked as contained no longer eliminates
/// others. Containment is half-open (right and bottom edges lie outside), so
/// identical outlines do not remove each other.
pub fn filter_contained<S: Shape>(polygons: Vec<S>) -> Vec<S> {
    let n = polygons.len();
    let mut contained = vec![false; n];
    for i in 0..n {
        if contained[i] {
            continue;
        }
        for j in 0..n {
            if i != j && !contained[j] {
                contained[j] = polygons[i].contains(&polygons[j]);
            }
        }
    }
    let kept: Vec<S> = polygons
        .into_iter()
        .zip(contained)
        .filter_map(|(p, c)| (!c).then_some(p))
        .collect();
    log::debug!("containment filter kept {}/{} polygons", kept.len(), n);
    kept
}
