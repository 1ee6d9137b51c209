//! ensure serde is working as expected

use super::*;

#[test]
fn test_serde() {
    #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
    struct MyTypes {
        origin: Point<f64>,
        pixel: Point<i32>,
        extent: BoundingBox<f64>,
    }

    let my_instance = MyTypes {
        origin: Point::new(100.5, -2.25),
        pixel: Point::new(12, 480),
        extent: BoundingBox {
            x_min: 3.0,
            x_max: 411.0,
        },
    };

    let dumped = serde_json::to_string(&my_instance).unwrap();
    let loaded: MyTypes = serde_json::from_str(&dumped).unwrap();
    assert_eq!(my_instance, loaded)
}
