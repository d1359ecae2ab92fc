//! Commented starter file written when no config exists yet.

/// Every key is listed, commented out where the default applies.
pub(super) const STARTER: &str = r##"# Simulated desktop configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[workspace]
# width = 1920
# height = 1080
# taskbar_height = 50    # 0-200

[snap]
# enabled = true
# edge_threshold = 20    # 1-200
# corner_threshold = 30  # >= edge_threshold, <= 200

[resize]
# min_width = 300        # 50-2000
# min_height = 200       # 50-2000

[drag]
# click_epsilon = 3.0    # 0-20, releases closer than this count as clicks
# header_offset = 20.0   # 0-200

[windows]
# default_width = "60%"  # "640px" or a share of the usable workspace
# default_height = "50%"
# cascade_min_percent = 10
# cascade_max_percent = 30
# base_z_order = 1000

[logging]
level = "INFO"           # DEBUG, INFO, WARNING, ERROR
"##;
