use joya_server_lib::utils::images::{
    fit_within, format_file_size, responsive_image, Dimensions, DEFAULT_RESPONSIVE_WIDTHS,
};

#[test]
fn test_fit_within_never_upscales() {
    let small = Dimensions {
        width: 400,
        height: 300,
    };
    assert_eq!(fit_within(small, 800, 600), small);
}

#[test]
fn test_fit_within_exact_fit_unchanged() {
    let exact = Dimensions {
        width: 800,
        height: 600,
    };
    assert_eq!(fit_within(exact, 800, 600), exact);
}

#[test]
fn test_fit_within_scales_landscape() {
    let large = Dimensions {
        width: 4000,
        height: 3000,
    };
    assert_eq!(
        fit_within(large, 800, 800),
        Dimensions {
            width: 800,
            height: 600
        }
    );
}

#[test]
fn test_fit_within_scales_portrait() {
    let tall = Dimensions {
        width: 1000,
        height: 2000,
    };
    assert_eq!(
        fit_within(tall, 500, 500),
        Dimensions {
            width: 250,
            height: 500
        }
    );
}

#[test]
fn test_fit_within_one_axis_overflow() {
    // Width fits, height does not
    let tall = Dimensions {
        width: 300,
        height: 1200,
    };
    assert_eq!(
        fit_within(tall, 800, 600),
        Dimensions {
            width: 150,
            height: 600
        }
    );
}

#[test]
fn test_format_file_size_bytes() {
    assert_eq!(format_file_size(0), "0 B");
    assert_eq!(format_file_size(512), "512 B");
    assert_eq!(format_file_size(1023), "1023 B");
}

#[test]
fn test_format_file_size_larger_units() {
    assert_eq!(format_file_size(1024), "1 KB");
    assert_eq!(format_file_size(1536), "1.5 KB");
    assert_eq!(format_file_size(1048576), "1 MB");
    assert_eq!(format_file_size(2621440), "2.5 MB");
    assert_eq!(format_file_size(1073741824), "1 GB");
    // Largest unit is GB, so terabyte-scale counts stay in GB
    assert_eq!(format_file_size(1099511627776), "1024 GB");
}

#[test]
fn test_format_file_size_trims_trailing_zeros() {
    // 1126 / 1024 = 1.099..., printed as 1.1 rather than 1.10
    assert_eq!(format_file_size(1126), "1.1 KB");
}

#[test]
fn test_responsive_image_default_widths() {
    let image = responsive_image("/images/anillo.jpg", &[]);

    assert_eq!(image.src, "/images/anillo.jpg?w=400");
    assert_eq!(
        image.srcset,
        "/images/anillo.jpg?w=400 400w, /images/anillo.jpg?w=800 800w, /images/anillo.jpg?w=1200 1200w"
    );
    assert_eq!(
        image.sizes,
        "(max-width: 600px) 400px, (max-width: 1200px) 800px, 1200px"
    );
    assert_eq!(DEFAULT_RESPONSIVE_WIDTHS, [400, 800, 1200]);
}

#[test]
fn test_responsive_image_custom_widths() {
    let image = responsive_image("/images/anillo.jpg", &[320, 640]);

    assert_eq!(image.src, "/images/anillo.jpg?w=320");
    assert_eq!(
        image.srcset,
        "/images/anillo.jpg?w=320 320w, /images/anillo.jpg?w=640 640w"
    );
}
