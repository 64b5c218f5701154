use super::{append_run, CodecError, Cursor, EditCode, Run};

/// Rewrites every adjacent insertion/deletion pair into a diagonal of matches and
/// mismatches plus the left and right hangs.
///
/// Runs that are not part of such a pair are copied unchanged. The pair is
/// consumed as a unit, so the run following it is compared against its own
/// successor, never against the pair. Query and target spans are preserved.
pub fn refine_runs(query: &[u8], target: &[u8], runs: &[Run]) -> Result<Vec<Run>, CodecError> {
    if runs.len() <= 1 {
        return Ok(runs.to_vec());
    }

    let (query_len, target_len) = (query.len(), target.len());
    let mut refined = Vec::with_capacity(runs.len());
    let mut cursor = Cursor::default();
    let mut next_unconsumed = 0;

    let mut i = 1;
    while i < runs.len() {
        let (prev, curr) = (runs[i - 1], runs[i]);
        cursor.ensure_readable(query_len, target_len)?;

        if prev.op.is_opposite_indel(curr.op) {
            cursor = collapse_indel_pair(query, target, prev, curr, cursor, &mut refined)?;
            next_unconsumed = i + 1;
            i += 2;
        } else {
            append_run(&mut refined, prev.op, prev.len);
            cursor = cursor
                .advance(prev.op, prev.len)
                .ensure_within(query_len, target_len)?;
            next_unconsumed = i;
            i += 1;
        }
    }

    for run in &runs[next_unconsumed..] {
        append_run(&mut refined, run.op, run.len);
        cursor = cursor
            .advance(run.op, run.len)
            .ensure_within(query_len, target_len)?;
    }

    Ok(refined)
}

fn collapse_indel_pair(
    query: &[u8],
    target: &[u8],
    prev: Run,
    curr: Run,
    cursor: Cursor,
    refined: &mut Vec<Run>,
) -> Result<Cursor, CodecError> {
    let (query_len, target_len) = (query.len(), target.len());
    let min_len = prev.len.min(curr.len);
    let left_hang = prev.len - min_len;
    let right_hang = curr.len - min_len;

    append_run(refined, prev.op, left_hang);
    let mut cursor = cursor
        .advance(prev.op, left_hang)
        .ensure_within(query_len, target_len)?;

    for _ in 0..min_len {
        cursor = cursor.ensure_readable(query_len, target_len)?;
        let op = if query[cursor.query_pos] == target[cursor.target_pos] {
            EditCode::Match
        } else {
            EditCode::Mismatch
        };
        append_run(refined, op, 1);
        cursor = cursor.advance(op, 1);
    }

    append_run(refined, curr.op, right_hang);
    cursor
        .advance(curr.op, right_hang)
        .ensure_within(query_len, target_len)
}
