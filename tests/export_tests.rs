use oled_bitmap::{pack, Canvas};

fn row_of_eight(painted: &[u32]) -> Canvas {
    let mut canvas = Canvas::new(8, 1);
    for &col in painted {
        canvas.paint(0, col);
    }
    canvas
}

#[test]
fn test_first_cell_becomes_msb() {
    let packed = pack(&row_of_eight(&[0]));
    assert_eq!(packed.bytes().collect::<Vec<_>>(), vec![128]);
    assert_eq!(packed.to_string(), "0x80, \n");
}

#[test]
fn test_last_cell_becomes_lsb() {
    let packed = pack(&row_of_eight(&[7]));
    assert_eq!(packed.bytes().collect::<Vec<_>>(), vec![1]);
    assert_eq!(packed.to_string(), "0x1, \n");
}

#[test]
fn test_all_zero_row() {
    assert_eq!(pack(&row_of_eight(&[])).to_string(), "0x0, \n");
}

#[test]
fn test_bit_order_within_byte() {
    // cells 0, 2, 4, 6 -> 1010_1010
    let packed = pack(&row_of_eight(&[0, 2, 4, 6]));
    assert_eq!(packed.to_string(), "0xaa, \n");

    let packed = pack(&row_of_eight(&[0, 1, 2, 3, 4, 5, 6, 7]));
    assert_eq!(packed.to_string(), "0xff, \n");
}

#[test]
fn test_one_line_per_row() {
    let mut canvas = Canvas::new(32, 32);
    canvas.paint(5, 9);
    let text = pack(&canvas).to_string();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 32);
    for (row, line) in lines.iter().enumerate() {
        assert_eq!(line.matches("0x").count(), 4, "row {}", row);
        assert!(line.ends_with(", "));
    }
    assert_eq!(lines[5], "0x0, 0x40, 0x0, 0x0, ");
    assert!(text.ends_with('\n'));
}

#[test]
fn test_byte_count_matches_canvas_bits() {
    for (width, height) in [(8, 8), (16, 24), (128, 128)] {
        let packed = pack(&Canvas::new(width, height));
        assert_eq!(packed.byte_count(), (width * height / 8) as usize);
        assert_eq!(packed.rows().len(), height as usize);
    }
}

#[test]
fn test_unaligned_width_carries_across_rows() {
    // 12 cells per row: 24 bits -> 3 bytes; row 0 completes one, row 1 two
    let mut canvas = Canvas::new(12, 2);
    canvas.paint(0, 8);
    let packed = pack(&canvas);
    assert_eq!(packed.rows(), &[vec![0x00], vec![0x80, 0x00]]);
}

#[test]
fn test_export_does_not_modify_canvas() {
    let mut canvas = Canvas::new(16, 16);
    canvas.paint(3, 3);
    let before = canvas.clone();
    let _ = pack(&canvas);
    assert_eq!(canvas, before);
}
