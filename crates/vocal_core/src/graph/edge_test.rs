use super::*;

#[test]
fn test_opposite_vertex() {
  let edge = Edge::new(3, 7, Vec::new());
  assert_eq!(edge.opposite(3), Some(7));
  assert_eq!(edge.opposite(7), Some(3));
  assert_eq!(edge.opposite(5), None, "non-endpoint has no opposite");
}

#[test]
fn test_self_loop_opposite_is_itself() {
  let edge = Edge::new(2, 2, vec![Point::new(1, 1, 1)]);
  assert!(edge.is_self_loop());
  assert_eq!(edge.opposite(2), Some(2));
}

/// Direction does not matter for duplicate detection.
#[test]
fn test_same_endpoints_is_unordered() {
  let a = Edge::new(1, 4, Vec::new());
  let b = Edge::new(4, 1, vec![Point::new(0, 0, 9)]);
  let c = Edge::new(1, 5, Vec::new());

  assert!(a.same_endpoints(&b));
  assert!(b.same_endpoints(&a));
  assert!(!a.same_endpoints(&c));
  assert_eq!(a.endpoint_pair(), (1, 4));
  assert_eq!(b.endpoint_pair(), (1, 4));
}

#[test]
fn test_voxel_span_counts_endpoints() {
  let edge = Edge::new(0, 1, vec![Point::new(1, 0, 0)]);
  assert_eq!(edge.voxel_span(), 3);
  assert_eq!(Edge::new(0, 1, Vec::new()).voxel_span(), 2);
}

#[test]
fn test_new_edge_is_undefined() {
  assert_eq!(Edge::new(0, 1, Vec::new()).kind(), EdgeKind::Undefined);
}
