//! Test fixtures - layout documents shared by CLI tests.

/// Default resource root of a holdr project
pub const RES: &str = "src/main/res";

/// Default output root of a holdr project
pub const OUT: &str = "build/generated/holdr";

/// Two plain widgets
pub const MAIN_LAYOUT: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<LinearLayout xmlns:android="http://schemas.android.com/apk/res/android"
    xmlns:app="http://schemas.android.com/apk/res-auto"
    android:layout_width="match_parent"
    android:layout_height="match_parent">

    <TextView
        android:id="@+id/title"
        android:layout_width="wrap_content"
        android:layout_height="wrap_content" />

    <ListView
        android:id="@android:id/list"
        android:layout_width="match_parent"
        android:layout_height="0dp" />
</LinearLayout>
"#;

/// Landscape variant of `MAIN_LAYOUT` with one extra view
pub const MAIN_LAYOUT_LAND: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<LinearLayout xmlns:android="http://schemas.android.com/apk/res/android"
    android:orientation="horizontal">

    <TextView android:id="@+id/title" />
    <ImageView android:id="@+id/preview" />
</LinearLayout>
"#;

/// Custom view, field name override and an ignored view
pub const DETAIL_LAYOUT: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<FrameLayout xmlns:android="http://schemas.android.com/apk/res/android"
    xmlns:app="http://schemas.android.com/apk/res-auto">

    <com.example.app.widget.Chart
        android:id="@+id/sales_chart"
        app:holdr_field_name="chart" />

    <ProgressBar
        android:id="@+id/spinner"
        app:holdr_ignore="true" />

    <Button
        android:id="@+id/retry_button"
        app:holdr_include="true" />
</FrameLayout>
"#;

/// No element carries an id
pub const BLANK_LAYOUT: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<FrameLayout xmlns:android="http://schemas.android.com/apk/res/android">
    <View android:layout_width="match_parent" />
</FrameLayout>
"#;

/// Not well-formed
pub const BROKEN_LAYOUT: &str = "<LinearLayout><TextView></LinearLayout>";

/// Relative output path of a holder in package `com.example.app`
pub fn holder_path(class_name: &str) -> String {
    format!("{OUT}/com/example/app/holdr/{class_name}.java")
}

/// Relative path of a layout file in a variant directory
pub fn layout_path(variant: &str, name: &str) -> String {
    format!("{RES}/{variant}/{name}.xml")
}
