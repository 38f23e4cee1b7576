//! Synthetic rasters pushed through each of the five row filters, compressed
//! into a container, and pulled back out through the full pixel pipeline.

use chunkforge::chunk::{Segment, SegmentTag};
use chunkforge::container::MAGIC;
use chunkforge::pixel::{defilter, paeth_predictor};
use chunkforge::Container;

fn container_bytes(width: u32, height: u32, color_type: u8, filtered_rows: &[u8]) -> Vec<u8> {
  let compressed = miniz_oxide::deflate::compress_to_vec_zlib(filtered_rows, 6);
  let mut out = MAGIC.to_vec();
  let mut ihdr = Vec::new();
  ihdr.extend_from_slice(&width.to_be_bytes());
  ihdr.extend_from_slice(&height.to_be_bytes());
  ihdr.extend_from_slice(&[8, color_type, 0, 0, 0]);
  Segment::new(SegmentTag::IHDR, ihdr).write_to(&mut out);
  Segment::new(SegmentTag::IDAT, compressed).write_to(&mut out);
  Segment::new(SegmentTag::IEND, Vec::new()).write_to(&mut out);
  out
}

#[test]
fn none_filtered_rows_defilter_to_themselves() {
  let raw = [1u8, 2, 3, 4, 5, 6, 7, 8, 9];
  let mut rows = Vec::new();
  for chunk in raw.chunks(3) {
    rows.push(0);
    rows.extend_from_slice(chunk);
  }
  let bytes = container_bytes(3, 3, 0, &rows);
  let container = Container::open(&bytes).unwrap();
  assert_eq!(defilter(&container).unwrap(), raw);
}

#[test]
fn sub_filtered_rows_recover_a_running_difference() {
  let raw = [10u8, 20, 30, 40];
  let mut rows = vec![1u8, raw[0]];
  for pair in raw.windows(2) {
    rows.push(pair[1].wrapping_sub(pair[0]));
  }
  let bytes = container_bytes(4, 1, 0, &rows);
  let container = Container::open(&bytes).unwrap();
  assert_eq!(defilter(&container).unwrap(), raw);
}

#[test]
fn up_filtered_second_row_recovers_against_the_first() {
  let raw = [5u8, 6, 7, 9, 11, 13];
  let mut rows = vec![0u8];
  rows.extend_from_slice(&raw[..3]);
  rows.push(2);
  for i in 0..3 {
    rows.push(raw[3 + i].wrapping_sub(raw[i]));
  }
  let bytes = container_bytes(3, 2, 0, &rows);
  let container = Container::open(&bytes).unwrap();
  assert_eq!(defilter(&container).unwrap(), raw);
}

#[test]
fn average_filtered_row_recovers_using_floor_division() {
  let raw = [100u8, 150];
  let mut rows = vec![0u8, raw[0]];
  let avg = (u16::from(raw[0]) / 2) as u8;
  rows.push(raw[1].wrapping_sub(avg));
  let bytes = container_bytes(2, 1, 0, &rows);
  let container = Container::open(&bytes).unwrap();
  assert_eq!(defilter(&container).unwrap(), raw);
}

#[test]
fn paeth_filtered_raster_recovers_the_original() {
  let raw = [10u8, 20, 30, 15, 25, 35];
  let mut rows = vec![0u8];
  rows.extend_from_slice(&raw[..3]);
  rows.push(4);
  for i in 0..3 {
    let left = if i == 0 { 0 } else { raw[3 + i - 1] };
    let above = raw[i];
    let upper_left = if i == 0 { 0 } else { raw[i - 1] };
    let predicted = paeth_predictor(left, above, upper_left);
    rows.push(raw[3 + i].wrapping_sub(predicted));
  }
  let bytes = container_bytes(3, 2, 0, &rows);
  let container = Container::open(&bytes).unwrap();
  assert_eq!(defilter(&container).unwrap(), raw);
}

#[test]
fn paeth_tie_break_order_is_a_then_b_then_c() {
  // a == b == c: every distance is zero, `a` must win.
  assert_eq!(paeth_predictor(7, 7, 7), 7);
  // p = a + b - c = 0 + 10 - 0 = 10: |10-0|=10, |10-10|=0, |10-0|=10 -> b wins.
  assert_eq!(paeth_predictor(0, 10, 0), 10);
}

#[test]
fn two_by_two_rgb_raster_defilters_to_the_documented_bytes() {
  let raw = [10u8, 20, 30, 11, 21, 31, 12, 22, 32, 13, 23, 33];
  let mut rows = Vec::new();
  for chunk in raw.chunks(6) {
    rows.push(0);
    rows.extend_from_slice(chunk);
  }
  let bytes = container_bytes(2, 2, 2, &rows);
  let container = Container::open(&bytes).unwrap();
  assert_eq!(defilter(&container).unwrap(), raw);
}
