//! End-to-end tests for the `crud` pipeline against a project on disk.
//!
//! Collaborators are fakes, so no git, formatter or Python is needed.

use std::path::PathBuf;

use falco_codegen::{
    Error,
    env::SourceKind,
    pipeline::{CrudContext, CrudRequest, Diagnostic, Pipeline},
    testing::{FakeEnvironment, ProjectFixture, ROOT_URLS},
};
use falco_core::SkipReason;

const SHOP: &str = r#"
[project]
templates_dir = "templates"

[apps.shop]

[[apps.shop.models]]
name = "Product"

[[apps.shop.models.fields]]
name = "name"
type = "CharField"

[[apps.shop.models.fields]]
name = "price"
type = "DecimalField"

[[apps.shop.models.fields]]
name = "image"
type = "ImageField"

[[apps.shop.models.fields]]
name = "created_at"
type = "DateTimeField"
editable = false

[[apps.shop.models]]
name = "Category"
verbose_name_plural = "categories"

[[apps.shop.models.fields]]
name = "title"
type = "CharField"
"#;

struct Run {
    models: String,
    python_files: Vec<PathBuf>,
    html_files: Vec<PathBuf>,
    diagnostics: Vec<Diagnostic>,
}

impl Run {
    fn skipped(&self) -> Vec<&SkipReason> {
        self.diagnostics
            .iter()
            .filter_map(|d| d.reason.as_ref())
            .collect()
    }
}

fn run(
    fixture: &ProjectFixture,
    fake: &FakeEnvironment,
    request: &CrudRequest,
) -> eyre::Result<Run> {
    let env = fake.environment();
    let ctx = CrudContext::new(request, fixture.manifest(), fixture.root(), &env);
    let ctx = Pipeline::for_request(request).run(ctx)?;
    Ok(Run {
        models: ctx.model_names(),
        python_files: ctx.python_files.iter().cloned().collect(),
        html_files: ctx.html_files.iter().cloned().collect(),
        diagnostics: ctx.diagnostics.clone(),
    })
}

fn request(model_path: &str) -> CrudRequest {
    CrudRequest::new(model_path.parse().expect("valid model path"))
}

#[test]
fn test_single_model_creates_routes_and_registers_them() {
    let fixture = ProjectFixture::new(SHOP).unwrap();
    let fake = FakeEnvironment::clean();

    let result = run(&fixture, &fake, &request("shop.Product")).unwrap();
    assert_eq!(result.models, "Product");
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);

    let urls = fixture.read("shop/urls.py").unwrap();
    assert_eq!(urls.matches("path(").count(), 5);
    assert!(urls.contains("app_name = \"shop\""));
    assert!(urls.contains("path('products/<int:pk>/update/', views.product_update, name='product_update')"));

    insta::assert_snapshot!(fixture.read("config/urls.py").unwrap(), @r#"
    from django.urls import include
    from django.contrib import admin
    from django.urls import path

    urlpatterns = [
        path("admin/", admin.site.urls),
        path('shop/', include('shop.urls', namespace='shop')),
    ]
    "#);

    let forms = fixture.read("shop/forms.py").unwrap();
    assert!(forms.contains("class ProductForm(forms.ModelForm):"));
    assert!(forms.contains("\"price\","));
    assert!(!forms.contains("\"created_at\","));

    let views = fixture.read("shop/views.py").unwrap();
    for view in ["list", "detail", "create", "update", "delete"] {
        assert!(views.contains(&format!("def product_{}(", view)), "missing {}", view);
    }
    assert!(views.contains("request.FILES or None"));
    assert!(!views.contains("login_required"));

    let admin = fixture.read("shop/admin.py").unwrap();
    assert!(admin.starts_with("from django.contrib import admin\n"));
    assert!(admin.contains("@admin.register(Product)"));

    for template in ["list", "create", "update", "detail"] {
        assert!(fixture.exists(&format!("templates/shop/product_{}.html", template)));
    }
    let detail = fixture.read("templates/shop/product_detail.html").unwrap();
    assert!(detail.contains("{{product.name}}"));
    assert!(detail.contains("{% url 'shop:product_delete' product.pk %}"));
    let create = fixture.read("templates/shop/product_create.html").unwrap();
    assert!(create.contains("{{ form.as_p }}"));
    assert!(create.contains("enctype=\"multipart/form-data\""));

    assert_eq!(
        result.python_files,
        [
            fixture.path("shop/forms.py"),
            fixture.path("shop/views.py"),
            fixture.path("shop/admin.py"),
            fixture.path("shop/urls.py"),
            fixture.path("config/urls.py"),
        ]
    );
    assert_eq!(result.html_files.len(), 4);
    assert_eq!(fake.formatted(SourceKind::Python), result.python_files);
    assert_eq!(fake.formatted(SourceKind::Html), result.html_files);
    assert_eq!(fake.repo_checks(), 1);
}

#[test]
fn test_whole_app_generates_every_model() {
    let fixture = ProjectFixture::new(SHOP).unwrap();
    let fake = FakeEnvironment::clean();

    let result = run(&fixture, &fake, &request("shop")).unwrap();
    assert_eq!(result.models, "Product, Category");

    let urls = fixture.read("shop/urls.py").unwrap();
    assert_eq!(urls.matches("path(").count(), 10);
    assert!(urls.contains("path('categories/', views.category_list, name='category_list')"));

    let views = fixture.read("shop/views.py").unwrap();
    let product = views.find("def product_list(").unwrap();
    let category = views.find("def category_list(").unwrap();
    assert!(product < category);

    assert!(fixture.exists("templates/shop/category_update.html"));
    assert_eq!(result.html_files.len(), 8);
}

#[test]
fn test_second_run_appends_again_and_keeps_existing_code() {
    let fixture = ProjectFixture::new(SHOP).unwrap();
    fixture
        .write("shop/forms.py", "# hand written\nclass SearchForm:\n    pass\n")
        .unwrap();
    let fake = FakeEnvironment::clean();

    run(&fixture, &fake, &request("shop.Product")).unwrap();
    let second = run(&fixture, &fake, &request("shop.Product")).unwrap();

    let forms = fixture.read("shop/forms.py").unwrap();
    assert_eq!(forms.matches("class ProductForm(").count(), 2);
    assert!(forms.contains("# hand written\nclass SearchForm:\n    pass\n"));
    assert_eq!(
        fixture
            .read("shop/views.py")
            .unwrap()
            .matches("def product_list(")
            .count(),
        2
    );

    // The app routes are extended, the project routes are not touched again
    assert_eq!(fixture.read("shop/urls.py").unwrap().matches("path(").count(), 10);
    let root_urls = fixture.read("config/urls.py").unwrap();
    assert_eq!(root_urls.matches("include('shop.urls'").count(), 1);
    assert!(!second.python_files.contains(&fixture.path("config/urls.py")));

    // Admin registration is not repeated
    assert_eq!(
        fixture
            .read("shop/admin.py")
            .unwrap()
            .matches("@admin.register(Product)")
            .count(),
        1
    );
    assert!(second.skipped().contains(&&SkipReason::AlreadyRegistered {
        name: "Product".into()
    }));
}

#[test]
fn test_entry_point_without_model_is_a_usage_error() {
    let fixture = ProjectFixture::new(SHOP).unwrap();
    let before = fixture.files().unwrap();
    let fake = FakeEnvironment::clean();

    let mut req = request("shop");
    req.entry_point = true;
    let err = run(&fixture, &fake, &req).err().unwrap();

    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::Usage { .. })
    ));
    assert_eq!(fixture.files().unwrap(), before);
    assert_eq!(fake.repo_checks(), 0);
}

#[test]
fn test_dirty_repository_writes_nothing() {
    let fixture = ProjectFixture::new(SHOP).unwrap();
    let before = fixture.files().unwrap();
    let fake = FakeEnvironment::dirty();

    let err = run(&fixture, &fake, &request("shop.Product")).err().unwrap();

    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::DirtyRepo { .. })
    ));
    assert_eq!(fixture.files().unwrap(), before);
    assert!(fake.formatted(SourceKind::Python).is_empty());
}

#[test]
fn test_allow_dirty_skips_the_check() {
    let fixture = ProjectFixture::new(SHOP).unwrap();
    let fake = FakeEnvironment::dirty();

    let mut req = request("shop.Product");
    req.allow_dirty = true;
    run(&fixture, &fake, &req).unwrap();

    assert_eq!(fake.repo_checks(), 0);
    assert!(fixture.exists("shop/views.py"));
}

#[test]
fn test_already_registered_model_leaves_admin_untouched() {
    let fixture = ProjectFixture::new(SHOP).unwrap();
    let admin = "from django.contrib import admin\n\nfrom .models import Product\n\nadmin.site.register(Product)\n";
    fixture.write("shop/admin.py", admin).unwrap();
    let fake = FakeEnvironment::clean();

    let result = run(&fixture, &fake, &request("shop.product")).unwrap();

    assert_eq!(fixture.read("shop/admin.py").unwrap(), admin);
    assert_eq!(
        result.skipped(),
        [&SkipReason::AlreadyRegistered {
            name: "Product".into()
        }]
    );
    assert!(!result.python_files.contains(&fixture.path("shop/admin.py")));
}

#[test]
fn test_whole_app_leaves_non_empty_admin_untouched() {
    let fixture = ProjectFixture::new(SHOP).unwrap();
    fixture
        .write("shop/admin.py", "from django.contrib import admin\n")
        .unwrap();
    let fake = FakeEnvironment::clean();

    let result = run(&fixture, &fake, &request("shop")).unwrap();

    assert_eq!(
        fixture.read("shop/admin.py").unwrap(),
        "from django.contrib import admin\n"
    );
    assert!(matches!(
        result.skipped().as_slice(),
        [SkipReason::NotEmpty { .. }]
    ));
}

#[test]
fn test_single_model_admin_hoists_imports() {
    let fixture = ProjectFixture::new(SHOP).unwrap();
    fixture
        .write(
            "shop/admin.py",
            "from django.contrib import admin\n\nfrom .models import Category\n\nadmin.site.register(Category)\n",
        )
        .unwrap();
    let fake = FakeEnvironment::clean();

    run(&fixture, &fake, &request("shop.Product")).unwrap();

    let admin = fixture.read("shop/admin.py").unwrap();
    assert!(admin.starts_with(
        "from django.contrib import admin\nfrom .models import Category\nfrom .models import Product\n"
    ));
    assert_eq!(admin.matches("from django.contrib import admin").count(), 1);
    assert!(admin.contains("admin.site.register(Category)"));
    assert!(admin.contains("@admin.register(Product)"));
}

#[test]
fn test_excluded_fields_are_left_out() {
    let fixture = ProjectFixture::new(SHOP).unwrap();
    let fake = FakeEnvironment::clean();

    let mut req = request("shop.Product");
    req.excluded_fields = vec!["image".into(), "price".into()];
    run(&fixture, &fake, &req).unwrap();

    for file in ["shop/forms.py", "shop/admin.py", "templates/shop/product_list.html"] {
        let content = fixture.read(file).unwrap();
        assert!(!content.contains("image"), "{} mentions image", file);
        assert!(!content.contains("price"), "{} mentions price", file);
    }
    // Without file fields the forms no longer take uploads
    assert!(!fixture.read("shop/views.py").unwrap().contains("request.FILES"));
}

#[test]
fn test_entry_point_names() {
    let fixture = ProjectFixture::new(SHOP).unwrap();
    let fake = FakeEnvironment::clean();

    let mut req = request("shop.Product");
    req.entry_point = true;
    run(&fixture, &fake, &req).unwrap();

    let views = fixture.read("shop/views.py").unwrap();
    assert!(views.contains("def index("));
    assert!(views.contains("def detail("));
    assert!(!views.contains("product_"));
    assert!(views.contains("\"shop/index.html\""));

    let urls = fixture.read("shop/urls.py").unwrap();
    assert!(urls.contains("path('', views.index, name='index')"));
    assert!(urls.contains("path('<int:pk>/delete/', views.delete, name='delete')"));

    assert!(fixture.exists("templates/shop/index.html"));
    assert!(fixture.exists("templates/shop/create.html"));
    assert!(!fixture.exists("templates/shop/product_list.html"));
    let detail = fixture.read("templates/shop/detail.html").unwrap();
    assert!(detail.contains("{% url 'shop:index' %}"));
}

#[test]
fn test_only_html_skips_python_admin_and_urls() {
    let fixture = ProjectFixture::new(SHOP).unwrap();
    let fake = FakeEnvironment::clean();

    let mut req = request("shop.Product");
    req.only_html = true;
    let result = run(&fixture, &fake, &req).unwrap();

    assert!(result.python_files.is_empty());
    assert!(!fixture.exists("shop/forms.py"));
    assert!(!fixture.exists("shop/admin.py"));
    assert!(!fixture.exists("shop/urls.py"));
    assert_eq!(fixture.read("config/urls.py").unwrap(), ROOT_URLS);
    assert_eq!(result.html_files.len(), 4);
    assert!(fake.formatted(SourceKind::Python).is_empty());
}

#[test]
fn test_only_python_skips_templates() {
    let fixture = ProjectFixture::new(SHOP).unwrap();
    let fake = FakeEnvironment::clean();

    let mut req = request("shop.Product");
    req.only_python = true;
    let result = run(&fixture, &fake, &req).unwrap();

    assert!(result.html_files.is_empty());
    assert!(!fixture.exists("templates"));
    assert!(fixture.exists("shop/urls.py"));
}

#[test]
fn test_both_only_flags_write_nothing() {
    let fixture = ProjectFixture::new(SHOP).unwrap();
    let before = fixture.files().unwrap();
    let fake = FakeEnvironment::clean();

    let mut req = request("shop.Product");
    req.only_python = true;
    req.only_html = true;
    assert_eq!(
        Pipeline::for_request(&req).phase_names(),
        ["validate", "guard", "resolve", "format"]
    );
    let result = run(&fixture, &fake, &req).unwrap();

    assert_eq!(result.models, "Product");
    assert!(result.python_files.is_empty());
    assert!(result.html_files.is_empty());
    assert!(result.diagnostics.is_empty());
    assert_eq!(fixture.files().unwrap(), before);
    assert!(fake.formatted(SourceKind::Python).is_empty());
    assert!(fake.formatted(SourceKind::Html).is_empty());
}

#[test]
fn test_login_required() {
    let fixture = ProjectFixture::new(SHOP).unwrap();
    let fake = FakeEnvironment::clean();

    let mut req = request("shop.Product");
    req.login_required = true;
    run(&fixture, &fake, &req).unwrap();

    let views = fixture.read("shop/views.py").unwrap();
    assert!(views.contains("from django.contrib.auth.decorators import login_required"));
    assert_eq!(views.matches("@login_required\n").count(), 5);
}

#[test]
fn test_migrate_runs_before_generation() {
    let fixture = ProjectFixture::new(SHOP).unwrap();
    let fake = FakeEnvironment::clean();

    let mut req = request("shop.Product");
    req.migrate = true;
    run(&fixture, &fake, &req).unwrap();

    assert_eq!(fake.migration_calls(), ["makemigrations shop", "migrate"]);
}

#[test]
fn test_missing_project_routes_is_a_warning() {
    let fixture = ProjectFixture::new(SHOP).unwrap();
    std::fs::remove_file(fixture.path("config/urls.py")).unwrap();
    let fake = FakeEnvironment::clean();

    let result = run(&fixture, &fake, &request("shop.Product")).unwrap();

    assert!(fixture.exists("shop/urls.py"));
    assert!(!fixture.exists("config/urls.py"));
    assert_eq!(
        result.skipped(),
        [&SkipReason::FileMissing {
            path: fixture.path("config/urls.py")
        }]
    );
}

#[test]
fn test_missing_formatters_are_warnings() {
    let fixture = ProjectFixture::new(SHOP).unwrap();
    let fake = FakeEnvironment::without_formatters();

    let result = run(&fixture, &fake, &request("shop.Product")).unwrap();

    let skipped = result.skipped();
    assert_eq!(skipped.len(), 2);
    assert!(
        skipped
            .iter()
            .all(|reason| matches!(reason, SkipReason::ToolUnavailable { .. }))
    );
}

#[test]
fn test_unknown_model_is_not_found() {
    let fixture = ProjectFixture::new(SHOP).unwrap();
    let before = fixture.files().unwrap();
    let fake = FakeEnvironment::clean();

    let err = run(&fixture, &fake, &request("shop.Order")).err().unwrap();
    assert_eq!(err.to_string(), "model 'shop.Order' not found");

    let err = run(&fixture, &fake, &request("blog")).err().unwrap();
    assert_eq!(err.to_string(), "app 'blog' not found");
    assert_eq!(fixture.files().unwrap(), before);
}

#[test]
fn test_blueprint_overrides() {
    let toml = SHOP.replace(
        "templates_dir = \"templates\"",
        "templates_dir = \"templates\"\nblueprints_dir = \"blueprints\"",
    );
    let fixture = ProjectFixture::new(&toml).unwrap();
    fixture
        .write(
            "blueprints/crud/forms.py.hbs",
            "# IMPORTS:START\nfrom django import forms\n# IMPORTS:END\n# CODE:START\nclass {{model_name}}Form(forms.Form):\n    pass\n",
        )
        .unwrap();
    let fake = FakeEnvironment::clean();

    let result = run(&fixture, &fake, &request("shop.Product")).unwrap();

    // The override has no closing code marker, so only its imports are used
    assert_eq!(
        fixture.read("shop/forms.py").unwrap(),
        "\nfrom django import forms\n"
    );
    assert_eq!(
        result.skipped(),
        [&SkipReason::MissingSentinel {
            marker: "# CODE:END".into()
        }]
    );
}
