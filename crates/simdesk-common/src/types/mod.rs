mod core;

pub use self::core::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_clone_and_equality() {
        let r = Rect {
            x: 10.0,
            y: 20.0,
            width: 800.0,
            height: 600.0,
        };
        let r2 = r;
        assert_eq!(r, r2);
    }

    #[test]
    fn rect_serialization() {
        let r = Rect::new(0.0, 0.0, 1920.0, 1080.0);
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }

    #[test]
    fn rect_edges() {
        let r = Rect::new(100.0, 50.0, 600.0, 400.0);
        assert_eq!(r.right(), 700.0);
        assert_eq!(r.bottom(), 450.0);
        assert_eq!(r.center_x(), 400.0);
    }

    #[test]
    fn rect_translate_keeps_size() {
        let r = Rect::new(100.0, 100.0, 600.0, 400.0).translate(-95.0, 20.0);
        assert_eq!(r, Rect::new(5.0, 120.0, 600.0, 400.0));
    }

    #[test]
    fn rect_with_origin() {
        let r = Rect::new(100.0, 100.0, 600.0, 400.0).with_origin(Point::new(0.0, 0.0));
        assert_eq!(r, Rect::new(0.0, 0.0, 600.0, 400.0));
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(99.9, 50.0)));
        assert!(!r.contains(Point::new(100.0, 50.0)));
        assert!(!r.contains(Point::new(-1.0, 50.0)));
    }

    #[test]
    fn point_delta() {
        let a = Point::new(10.0, 10.0);
        let b = Point::new(13.0, 14.0);
        assert_eq!(a.delta_to(b), (3.0, 4.0));
        assert!((a.distance_to(b) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn window_id_display() {
        let id = WindowId::from("terminal");
        assert_eq!(id.to_string(), "terminal");
        assert_eq!(id.as_str(), "terminal");
    }

    #[test]
    fn window_id_hash_and_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(WindowId::from("a"));
        set.insert(WindowId::from("b"));
        set.insert(WindowId::from("a"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn window_id_serializes_as_plain_string() {
        let id = WindowId::from("files");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"files\"");
        let back: WindowId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn length_parses_pixels_and_percent() {
        assert_eq!("60%".parse::<Length>().unwrap(), Length::Percent(60.0));
        assert_eq!("300px".parse::<Length>().unwrap(), Length::Px(300.0));
        assert_eq!(" 250 ".parse::<Length>().unwrap(), Length::Px(250.0));
        assert!("wide".parse::<Length>().is_err());
        assert!("%".parse::<Length>().is_err());
    }

    #[test]
    fn length_resolves_against_reference() {
        assert_eq!(Length::Percent(50.0).resolve(1920.0), 960.0);
        assert_eq!(Length::Px(300.0).resolve(1920.0), 300.0);
    }

    #[test]
    fn length_serializes_as_text() {
        let json = serde_json::to_string(&Length::Percent(60.0)).unwrap();
        assert_eq!(json, "\"60%\"");
        let back: Length = serde_json::from_str("\"120px\"").unwrap();
        assert_eq!(back, Length::Px(120.0));
        assert!(serde_json::from_str::<Length>("\"abc\"").is_err());
    }
}
