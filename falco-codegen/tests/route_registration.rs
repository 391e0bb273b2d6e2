//! Tests for patching the project routes module on disk.

use falco_codegen::routes::{INCLUDE_IMPORT, patch_route_registration};
use falco_core::{Outcome, SkipReason};
use tempfile::TempDir;

#[test]
fn test_patch_preserves_the_rest_of_the_module() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("urls.py");
    std::fs::write(
        &path,
        r#""""Project routes."""
from django.contrib import admin
from django.urls import path

# keep me
urlpatterns = [
    path("admin/", admin.site.urls),  # admin site
    path("", home)
]

if settings.DEBUG:
    urlpatterns += debug_toolbar_urls()
"#,
    )
    .unwrap();

    let outcome = patch_route_registration(&path, "blog", "apps.blog").unwrap();
    assert_eq!(outcome, Outcome::Applied);

    insta::assert_snapshot!(std::fs::read_to_string(&path).unwrap(), @r#"
    from django.urls import include
    """Project routes."""
    from django.contrib import admin
    from django.urls import path

    # keep me
    urlpatterns = [
        path("admin/", admin.site.urls),  # admin site
        path("", home),
        path('blog/', include('apps.blog.urls', namespace='blog')),
    ]

    if settings.DEBUG:
        urlpatterns += debug_toolbar_urls()
    "#);
}

#[test]
fn test_patch_keeps_windows_line_endings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("urls.py");
    std::fs::write(
        &path,
        "from django.urls import path\r\n\r\nurlpatterns = [\r\n    path('admin/', admin.site.urls),\r\n]\r\n",
    )
    .unwrap();

    let outcome = patch_route_registration(&path, "shop", "shop").unwrap();
    assert_eq!(outcome, Outcome::Applied);

    let patched = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        patched,
        "from django.urls import include\r\nfrom django.urls import path\r\n\r\nurlpatterns = [\r\n    path('admin/', admin.site.urls),\r\n    path('shop/', include('shop.urls', namespace='shop')),\r\n]\r\n"
    );
    assert!(!patched.replace("\r\n", "").contains('\n'));
}

#[test]
fn test_patch_is_skipped_when_already_included() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("urls.py");
    let source = "urlpatterns = [\n    path('blog/', include('blog.urls', namespace='blog')),\n]\n";
    std::fs::write(&path, source).unwrap();

    let outcome = patch_route_registration(&path, "blog", "blog").unwrap();
    assert_eq!(
        outcome,
        Outcome::Skipped(SkipReason::AlreadyRegistered {
            name: "blog.urls".into()
        })
    );
    assert_eq!(std::fs::read_to_string(&path).unwrap(), source);
}

#[test]
fn test_patch_is_skipped_without_a_route_list() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("urls.py");
    let source = "from .routes import urlpatterns\n";
    std::fs::write(&path, source).unwrap();

    let outcome = patch_route_registration(&path, "blog", "blog").unwrap();
    assert!(matches!(
        outcome,
        Outcome::Skipped(SkipReason::TargetNotFound { .. })
    ));
    assert!(!std::fs::read_to_string(&path).unwrap().starts_with(INCLUDE_IMPORT));
}

#[test]
fn test_patch_is_skipped_for_a_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.py");

    let outcome = patch_route_registration(&path, "blog", "blog").unwrap();
    assert_eq!(
        outcome,
        Outcome::Skipped(SkipReason::FileMissing { path: path.clone() })
    );
    assert!(!path.exists());
}
