//! Movement sweep.
//!
//! Attributes a tick's simulation time across every tile the avatar's centre
//! crosses, in travel order, so tile effects scale with how far the avatar
//! went through each tile rather than firing once per tick.

use log::debug;
use raylib::prelude::{Rectangle, Vector2};
use smallvec::SmallVec;

use crate::geometry::{LineSegment, RectExt};
use crate::resources::tilemap::TileMap;
use crate::resources::tilemap::tile::TriggerSink;

/// Percentages of one layer may drift this far from 1.0 before it is logged.
const SWEEP_TOLERANCE: f32 = 1e-3;

/// One tile crossing, addressed by index into the map's tile array.
#[derive(Debug, Clone, Copy)]
struct SweepRecord {
    tile: usize,
    segment: LineSegment,
    /// Distance from the sweep start to where this crossing begins.
    start_distance: f32,
}

impl TileMap {
    /// Walk the tiles crossed by the centre of `before` moving by
    /// `displacement` and report each visit to `sink` in travel order.
    ///
    /// A zero displacement visits the occupied tile once with the full
    /// `elapsed`.
    pub fn do_move(
        &self,
        elapsed: f32,
        before: &Rectangle,
        displacement: Vector2,
        sink: &mut impl TriggerSink,
    ) {
        let c0 = before.center_point();
        let c1 = Vector2::new(c0.x + displacement.x, c0.y + displacement.y);
        let path = LineSegment::new(c0, c1);
        let broad_phase = path.bounding_rect().padded(1.0);

        let mut records: SmallVec<[SweepRecord; 8]> = SmallVec::new();
        for (index, tile) in self.tiles.iter().enumerate() {
            if !tile.bounds.overlaps_rect(&broad_phase) {
                continue;
            }
            let segment = path.clip_to(&tile.bounds);
            if !segment.is_valid() {
                continue;
            }
            records.push(SweepRecord {
                tile: index,
                segment,
                start_distance: path.distance_to_p1(segment.p1),
            });
        }

        records.sort_by(|a, b| a.start_distance.total_cmp(&b.start_distance));

        let total_length = path.length();
        let mut layer_totals: SmallVec<[(usize, f32); 4]> = SmallVec::new();
        for record in &records {
            let length = record.segment.length();
            let percent = if total_length == 0.0 {
                1.0
            } else {
                length / total_length
            };
            let tile = &self.tiles[record.tile];
            sink.on_tile_visit(tile, elapsed * percent, length);

            match layer_totals.iter_mut().find(|(layer, _)| *layer == tile.layer) {
                Some((_, sum)) => *sum += percent,
                None => layer_totals.push((tile.layer, percent)),
            }
        }

        for (layer, sum) in layer_totals {
            if (sum - 1.0).abs() > SWEEP_TOLERANCE {
                debug!(
                    "sweep on layer {} covered {:.4} of the path ({:?} -> {:?})",
                    layer, sum, c0, c1
                );
            }
        }
    }
}
